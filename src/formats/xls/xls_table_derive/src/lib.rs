//! `#[derive(XlsTableRow)]` maps struct fields to spreadsheet table columns by their titles:
//!
//! ```ignore
//! #[derive(XlsTableRow)]
//! struct Row {
//!     #[column(name="Instrument Name")]
//!     name: Value,
//!     #[column(name="CREDIT")]
//!     credit: Cell,
//! }
//! ```

use darling::{FromDeriveInput, FromField, ast};
use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{DeriveInput, Ident, parse_macro_input};

#[proc_macro_derive(XlsTableRow, attributes(column))]
pub fn xls_table_row_derive(input: TokenStream) -> TokenStream {
    let ast = parse_macro_input!(input as DeriveInput);

    match TableRow::from_derive_input(&ast) {
        Ok(row) => row.expand().into(),
        Err(err) => err.write_errors().into(),
    }
}

#[derive(FromDeriveInput)]
#[darling(supports(struct_named))]
struct TableRow {
    ident: Ident,
    data: ast::Data<(), Column>,
}

#[derive(FromField)]
#[darling(attributes(column))]
struct Column {
    ident: Option<Ident>,
    name: String,
}

impl TableRow {
    fn expand(&self) -> TokenStream2 {
        let xls = quote!(crate::formats::xls);
        let row = &self.ident;

        let columns = self.data.as_ref().take_struct().map(|fields| fields.fields).unwrap_or_default();

        let definitions = columns.iter().map(|column| {
            let name = &column.name;
            quote!(#xls::TableColumn::new(#name))
        });

        let fields = columns.iter().enumerate().map(|(index, column)| {
            let (field, name) = (&column.ident, &column.name);
            quote! {
                #field: #xls::CellType::parse(row[#index]).map_err(|e| {
                    format!("{:?} column: {}", #name, e)
                })?
            }
        });

        quote! {
            impl #xls::TableRow for #row {
                fn columns() -> Vec<#xls::TableColumn> {
                    vec![#(#definitions),*]
                }

                fn parse(row: &[&#xls::Cell]) -> crate::core::GenericResult<#row> {
                    Ok(#row {
                        #(#fields),*
                    })
                }
            }
        }
    }
}
