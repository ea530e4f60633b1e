use anyhow::Result;

// Print the generated OpenAPI document without starting the server.
fn main() -> Result<()> {
    let spec = medigate::api::openapi();
    println!("{}", serde_json::to_string_pretty(&spec)?);
    Ok(())
}
