//! Entry point for the taskpad TUI application.

use taskpad_tui::{App, TuiResult};

#[tokio::main]
async fn main() -> TuiResult<()> {
    let mut app = App::new(None).await?;
    app.run().await
}
