use contact_client::{ConsoleNotifier, ContactForm, Field, FormClient, FormError, Outcome};

use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let base_url =
        std::env::var("CONTACT_SERVER_URL").unwrap_or_else(|_| "http://127.0.0.1:3000".to_string());
    let client = FormClient::new(&base_url);
    println!("Sending contact form to {}\n", client.endpoint());

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdout = tokio::io::stdout();
    let mut form = ContactForm::new();

    let mut pending: Vec<Field> = Field::ALL.to_vec();
    loop {
        for field in pending {
            stdout.write_all(format!("{field}: ").as_bytes()).await?;
            stdout.flush().await?;

            let Some(line) = lines.next_line().await? else {
                println!();
                return Ok(());
            };
            form.handle_change(field, line.trim());
        }

        match form.handle_submit(&client, &ConsoleNotifier).await {
            Ok(Outcome::Sent) => return Ok(()),
            Ok(Outcome::Failed) => std::process::exit(1),
            Err(e @ FormError::MissingField(field)) => {
                println!("{e}");
                pending = vec![field];
            }
        }
    }
}
