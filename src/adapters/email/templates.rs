//! HTML bodies for transactional mail.
//!
//! User-supplied text is HTML-escaped before interpolation.

use crate::domain::contact::ContactMessage;
use crate::ports::OutboundEmail;

const WRAPPER_OPEN: &str =
    r#"<div style="font-family: Arial, sans-serif; max-width: 600px; margin: 0 auto;">"#;
const WRAPPER_CLOSE: &str = "</div>";

fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Registration / resend one-time code.
pub fn otp_email(to: &str, code: &str, ttl_minutes: u64) -> OutboundEmail {
    let html = format!(
        r#"{open}
  <h2 style="color: #2563eb;">Verifikasi Akun Anda</h2>
  <p>Terima kasih telah mendaftar. Gunakan kode OTP berikut untuk verifikasi akun Anda:</p>
  <div style="background: #f3f4f6; padding: 20px; text-align: center; margin: 20px 0; font-size: 24px; font-weight: bold; letter-spacing: 2px;">{code}</div>
  <p>Kode ini akan kadaluarsa dalam {ttl_minutes} menit.</p>
  <p style="color: #6b7280; font-size: 14px;">Jika Anda tidak meminta kode ini, abaikan email ini.</p>
{close}"#,
        open = WRAPPER_OPEN,
        close = WRAPPER_CLOSE,
        code = escape(code),
        ttl_minutes = ttl_minutes,
    );
    OutboundEmail::new(to, "Kode OTP untuk Verifikasi Akun", html)
}

/// Link the user follows to choose a new password.
pub fn reset_link(base_url: &str, token: &str) -> String {
    let mut link = format!("{}/reset-password?", base_url.trim_end_matches('/'));
    link.push_str(
        &url::form_urlencoded::Serializer::new(String::new())
            .append_pair("token", token)
            .finish(),
    );
    link
}

pub fn password_reset_email(to: &str, fullname: &str, link: &str) -> OutboundEmail {
    let html = format!(
        r#"{open}
  <h2 style="color: #2563eb;">Reset Password</h2>
  <p>Halo {name},</p>
  <p>Kami menerima permintaan untuk mereset password akun Anda. Klik tombol di bawah untuk membuat password baru:</p>
  <p style="text-align: center; margin: 30px 0;">
    <a href="{link}" style="background: #2563eb; color: #fff; padding: 12px 24px; border-radius: 6px; text-decoration: none;">Reset Password</a>
  </p>
  <p>Link ini akan kadaluarsa dalam 1 jam.</p>
  <p style="color: #6b7280; font-size: 14px;">Jika Anda tidak meminta reset password, abaikan email ini.</p>
{close}"#,
        open = WRAPPER_OPEN,
        close = WRAPPER_CLOSE,
        name = escape(fullname),
        link = escape(link),
    );
    OutboundEmail::new(to, "Reset Password", html)
}

/// Sent to the site administrator for each contact form submission.
pub fn contact_notification_email(admin_email: &str, msg: &ContactMessage) -> OutboundEmail {
    let html = format!(
        r#"{open}
  <h2 style="color: #2563eb;">Pesan Baru dari Form Kontak</h2>
  <p><strong>Nama:</strong> {name}</p>
  <p><strong>Email:</strong> {email}</p>
  <p><strong>Subjek:</strong> {subject}</p>
  <div style="background: #f3f4f6; padding: 16px; white-space: pre-wrap;">{message}</div>
{close}"#,
        open = WRAPPER_OPEN,
        close = WRAPPER_CLOSE,
        name = escape(&msg.name),
        email = escape(&msg.email),
        subject = escape(&msg.subject),
        message = escape(&msg.message),
    );
    OutboundEmail::new(
        admin_email,
        format!("Pesan Kontak Baru: {}", msg.subject),
        html,
    )
}

/// Acknowledgement sent back to whoever filled in the contact form.
pub fn contact_confirmation_email(msg: &ContactMessage) -> OutboundEmail {
    let html = format!(
        r#"{open}
  <h2 style="color: #2563eb;">Terima Kasih, {name}</h2>
  <p>Pesan Anda dengan subjek "{subject}" telah kami terima. Tim kami akan segera menghubungi Anda.</p>
  <div style="background: #f3f4f6; padding: 16px; white-space: pre-wrap;">{message}</div>
{close}"#,
        open = WRAPPER_OPEN,
        close = WRAPPER_CLOSE,
        name = escape(&msg.name),
        subject = escape(&msg.subject),
        message = escape(&msg.message),
    );
    OutboundEmail::new(&msg.email, "Pesan Anda Telah Diterima", html)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message() -> ContactMessage {
        ContactMessage {
            name: "Sari".to_string(),
            email: "sari@example.com".to_string(),
            subject: "Harga <paket>".to_string(),
            message: "Halo & salam".to_string(),
        }
    }

    #[test]
    fn otp_email_contains_code_and_ttl() {
        let email = otp_email("a@example.com", "123456", 15);
        assert_eq!(email.to, "a@example.com");
        assert!(email.html.contains("123456"));
        assert!(email.html.contains("15 menit"));
    }

    #[test]
    fn reset_link_encodes_token() {
        assert_eq!(
            reset_link("https://portal.example.com/", "abc-123"),
            "https://portal.example.com/reset-password?token=abc-123"
        );
        assert_eq!(
            reset_link("http://x", "a b&c"),
            "http://x/reset-password?token=a+b%26c"
        );
    }

    #[test]
    fn reset_email_escapes_link_ampersands() {
        let email = password_reset_email("a@example.com", "Budi", "http://x/r?token=a&b=c");
        assert!(email.html.contains("token=a&amp;b=c"));
        assert!(email.html.contains("Halo Budi"));
    }

    #[test]
    fn contact_emails_escape_user_text() {
        let notification = contact_notification_email("admin@example.com", &message());
        assert_eq!(notification.to, "admin@example.com");
        assert!(notification.html.contains("Harga &lt;paket&gt;"));
        assert!(notification.html.contains("Halo &amp; salam"));

        let confirmation = contact_confirmation_email(&message());
        assert_eq!(confirmation.to, "sari@example.com");
        assert!(!confirmation.html.contains("<paket>"));
    }
}
