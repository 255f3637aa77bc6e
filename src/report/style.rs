use rust_xlsxwriter::{Format, FormatBorder};

const HEADER_BACKGROUND: u32 = 0xE8A820;
const HEADER_FONT: u32 = 0x000772;

const HIGHLIGHT_BACKGROUND: u32 = 0xD3D3D3;
const HIGHLIGHT_FONT: u32 = 0xE05904;

pub struct Styles {
    pub banner: Format,
    pub header: Format,
    pub body: Format,
    pub highlight: Format,
}

impl Styles {
    pub fn new() -> Styles {
        Styles {
            banner: Format::new(),
            header: Format::new()
                .set_bold()
                .set_font_color(HEADER_FONT)
                .set_background_color(HEADER_BACKGROUND)
                .set_border(FormatBorder::Thin),
            body: Format::new()
                .set_border(FormatBorder::Thin),
            highlight: Format::new()
                .set_bold()
                .set_font_color(HIGHLIGHT_FONT)
                .set_background_color(HIGHLIGHT_BACKGROUND)
                .set_border(FormatBorder::Thin),
        }
    }
}
