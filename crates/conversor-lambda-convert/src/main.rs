//! Lambda binary entry point.

use lambda_runtime::Error;

#[tokio::main]
async fn main() -> Result<(), Error> {
    conversor_lambda_convert::run().await
}
