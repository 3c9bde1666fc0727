#[tokio::main]
async fn main() {
    greenhouse_backend::run().await;
}
