use aws_config::BehaviorVersion;
use facematch::handler::compare_only;
use facematch::RekognitionComparer;
use lambda_http::{run, service_fn, Error};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .json()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let shared_config = aws_config::load_defaults(BehaviorVersion::latest()).await;
    let comparer = RekognitionComparer::new(aws_sdk_rekognition::Client::new(&shared_config));

    run(service_fn(|event| compare_only(event, &comparer))).await
}
