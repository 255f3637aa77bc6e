pub mod xls;
