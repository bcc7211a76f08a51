pub const SENT_MESSAGE: &str = "Message sent successfully!";
pub const FAILED_MESSAGE: &str = "Failed to send message. Please try again.";

/// Presents a submission outcome to the user.
pub trait Notifier {
    fn alert(&self, message: &str);
}

pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn alert(&self, message: &str) {
        println!("{message}");
    }
}
