use std::fmt::{self, Display};

use lettre::message::header::ContentType;
use lettre::message::{Attachment, Mailbox, MultiPart, SinglePart};
use lettre::{Address, Message};

use crate::pkg::internal::adaptors::jobs::spec::FileUpload;
use crate::prelude::{AppError, Result};

pub const SUBJECT: &str = "New Application";

#[derive(Debug)]
pub struct ApplicationEmail {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
    pub recipient: String,
    pub attachment: Option<FileUpload>,
}

impl Display for ApplicationEmail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Name: {}", self.name)?;
        writeln!(f, "Email: {}", self.email)?;
        writeln!(f, "Phone: {}", self.phone)?;
        writeln!(f, "Message: {}", self.message)
    }
}

fn address(raw: &str) -> Result<Address> {
    raw.trim()
        .parse()
        .map_err(|e| AppError::Email(format!("{}: {}", raw, e)))
}

impl ApplicationEmail {
    /// From carries the applicant's own address; `relay_account` goes into Sender
    /// so receivers can tell who actually submitted it.
    pub fn build_message(&self, relay_account: &str) -> Result<Message> {
        let builder = Message::builder()
            .from(Mailbox::new(Some(self.name.clone()), address(&self.email)?))
            .sender(Mailbox::new(None, address(relay_account)?))
            .to(Mailbox::new(None, address(&self.recipient)?))
            .subject(SUBJECT);
        let body = self.to_string();
        let message = match &self.attachment {
            Some(file) => {
                let octet_stream = ContentType::parse("application/octet-stream")
                    .map_err(|e| AppError::Email(e.to_string()))?;
                let attachment =
                    Attachment::new(file.file_name.clone()).body(file.data.clone(), octet_stream);
                builder.multipart(
                    MultiPart::mixed()
                        .singlepart(SinglePart::plain(body))
                        .singlepart(attachment),
                )
            }
            None => builder.header(ContentType::TEXT_PLAIN).body(body),
        };
        message.map_err(|e| AppError::Email(e.to_string()))
    }
}

#[cfg(test)]
pub mod tests {
    use super::*;

    fn application(attachment: Option<FileUpload>) -> ApplicationEmail {
        ApplicationEmail {
            name: "Jane Doe".into(),
            email: "jane@example.com".into(),
            phone: "555-0100".into(),
            message: "Please consider me".into(),
            recipient: "hr@example.com".into(),
            attachment,
        }
    }

    #[test]
    fn test_body_lists_all_fields() {
        let body = application(None).to_string();
        assert_eq!(
            body,
            "Name: Jane Doe\nEmail: jane@example.com\nPhone: 555-0100\nMessage: Please consider me\n"
        );
    }

    #[test]
    fn test_plain_message_headers() -> Result<()> {
        let msg = application(None).build_message("relay@example.com")?;
        let raw = String::from_utf8(msg.formatted()).unwrap();
        assert!(raw.contains("Subject: New Application"));
        assert!(raw.contains("jane@example.com"));
        assert!(raw.contains("To: hr@example.com"));
        assert!(raw.contains("Sender: relay@example.com"));
        assert!(raw.contains("Phone: 555-0100"));
        let envelope = msg.envelope();
        assert_eq!(envelope.to().len(), 1);
        assert_eq!(envelope.to()[0].to_string(), "hr@example.com");
        Ok(())
    }

    #[test]
    fn test_attachment_is_octet_stream() -> Result<()> {
        let file = FileUpload {
            file_name: "cv.pdf".into(),
            data: b"%PDF-1.4".to_vec(),
        };
        let msg = application(Some(file)).build_message("relay@example.com")?;
        let raw = String::from_utf8(msg.formatted()).unwrap();
        assert!(raw.contains("multipart/mixed"));
        assert!(raw.contains("application/octet-stream"));
        assert!(raw.contains("cv.pdf"));
        Ok(())
    }

    #[test]
    fn test_malformed_address_fails() {
        let mut app = application(None);
        app.recipient = "not-an-address".into();
        assert!(matches!(app.build_message("relay@example.com"), Err(AppError::Email(_))));
    }
}
