//! Test utilities and helper functions for the table2csv test suite

use anyhow::Result;
use kodegen_tools_table2csv::{AppState, ServerConfig, serve};
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// Creates a test HTML document with specified body content
#[allow(dead_code)]
pub fn create_test_html(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <title>{}</title>
</head>
<body>
    {}
</body>
</html>"#,
        title, body
    )
}

/// A styled page with one company table, as users typically paste it
#[allow(dead_code)]
pub fn create_company_table_html() -> String {
    create_test_html(
        "HTML Table",
        r"
    <style>
        table { border-collapse: collapse; width: 100%; }
        td, th { border: 1px solid #dddddd; padding: 8px; }
    </style>
    <h2>HTML Table</h2>
    <table>
      <tr>
        <th>Company</th>
        <th>Contact</th>
        <th>Country</th>
      </tr>
      <tr>
        <td>Alfreds Futterkiste</td>
        <td>Maria Anders</td>
        <td>Germany</td>
      </tr>
      <tr>
        <td>Centro comercial Moctezuma</td>
        <td>Francisco Chang</td>
        <td>Mexico</td>
      </tr>
      <tr>
        <td>Ernst Handel</td>
        <td>Roland Mendel</td>
        <td>Austria</td>
      </tr>
    </table>
    ",
    )
}

/// Expected CSV for [`create_company_table_html`] with LF line endings
#[allow(dead_code)]
pub const COMPANY_TABLE_CSV: &str = "Company,Contact,Country\n\
Alfreds Futterkiste,Maria Anders,Germany\n\
Centro comercial Moctezuma,Francisco Chang,Mexico\n\
Ernst Handel,Roland Mendel,Austria\n";

/// Encodes HTML the way the landing page form does
#[allow(dead_code)]
pub fn form_body(html: &str) -> String {
    format!("content={}", urlencoding::encode(html))
}

/// Starts a server on an ephemeral localhost port
///
/// The listener is bound before the task is spawned, so requests can be sent
/// immediately.
#[allow(dead_code)]
pub async fn spawn_test_server(config: ServerConfig) -> Result<(SocketAddr, JoinHandle<()>)> {
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    let handle = tokio::spawn(async move {
        if let Err(e) = serve(listener, AppState::new(config)).await {
            eprintln!("test server error: {e}");
        }
    });
    Ok((addr, handle))
}
