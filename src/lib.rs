pub mod config;
pub mod csv_encoder;
pub mod server;
pub mod table_extractor;
pub mod utils;

pub use config::ServerConfig;
pub use csv_encoder::{LineTerminator, encode_csv};
pub use server::{AppState, build_router, serve, start_server};
pub use table_extractor::{
    CellTextMode, ConversionError, ConversionResult, ConvertOptions, Grid, Row, TableConverter,
    convert_html_to_csv, extract_grid, find_table, parse_html, validate_html,
};
