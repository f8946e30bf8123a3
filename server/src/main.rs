#[tokio::main]
async fn main() {
    learn_log_server::start_server().await;
}
