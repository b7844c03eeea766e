//! Print the OpenAPI document as JSON.

use site_backend::doc::ApiDoc;
use utoipa::OpenApi;

#[expect(clippy::print_stdout, reason = "the document is the program output")]
fn main() -> Result<(), serde_json::Error> {
    println!("{}", ApiDoc::openapi().to_pretty_json()?);
    Ok(())
}
