//! Integration tests for `SmtpMailRelay` against a scripted local SMTP peer.
//!
//! The peer never offers STARTTLS, so every attempt must fail before any
//! credentials or message data cross the wire. Each attempt is observed as
//! its own connection.

use std::time::Duration;

use cafe_directory::domain::ports::{MailRelay, MailRelayError};
use cafe_directory::domain::{MailField, MailMessage};
use cafe_directory::outbound::mail::{MailCredentials, SmtpMailRelay, SmtpRelayConfig};
use rstest::{fixture, rstest};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::net::TcpListener;
use tokio::sync::mpsc;

const WAIT: Duration = Duration::from_secs(5);

#[derive(Clone, Copy)]
enum Peer {
    /// Greets and answers `EHLO` without advertising STARTTLS.
    PlainOnly,
    /// Accepts the connection and never says anything.
    Silent,
}

/// Commands seen on one connection, reported when the client hangs up.
type Transcript = Vec<String>;

async fn serve(peer: Peer) -> (u16, mpsc::UnboundedReceiver<Transcript>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind peer");
    let port = listener.local_addr().expect("peer address").port();
    let (tx, rx) = mpsc::unbounded_channel();
    tokio::spawn(async move {
        while let Ok((stream, _)) = listener.accept().await {
            let tx = tx.clone();
            tokio::spawn(async move {
                let (read, mut write) = stream.into_split();
                let mut lines = BufReader::new(read).lines();
                let mut seen = Transcript::new();
                if matches!(peer, Peer::PlainOnly) {
                    let _ = write.write_all(b"220 peer.test ESMTP\r\n").await;
                }
                while let Ok(Some(line)) = lines.next_line().await {
                    let reply: &[u8] = if line.starts_with("EHLO") {
                        b"250-peer.test\r\n250 8BITMIME\r\n"
                    } else if line.starts_with("QUIT") {
                        b"221 bye\r\n"
                    } else {
                        b"502 not implemented\r\n"
                    };
                    seen.push(line);
                    let _ = write.write_all(reply).await;
                }
                let _ = tx.send(seen);
            });
        }
    });
    (port, rx)
}

#[fixture]
fn message() -> MailMessage {
    MailMessage::new(
        "New Message",
        vec![
            MailField::new("Name", "Ada"),
            MailField::new("Email address", "ada@example.com"),
            MailField::new("Message", "Hi"),
        ],
    )
}

fn relay(port: u16, timeout: Duration) -> SmtpMailRelay {
    let config = SmtpRelayConfig {
        host: "127.0.0.1".to_owned(),
        port,
        timeout,
    };
    let credentials = MailCredentials::new("site@example.com", "hunter2");
    SmtpMailRelay::new(&config, &credentials).expect("relay builds")
}

async fn next_transcript(rx: &mut mpsc::UnboundedReceiver<Transcript>) -> Transcript {
    tokio::time::timeout(WAIT, rx.recv())
        .await
        .expect("connection closed in time")
        .expect("peer still running")
}

#[rstest]
#[tokio::test]
async fn relay_refuses_to_continue_without_starttls(message: MailMessage) {
    let (port, mut transcripts) = serve(Peer::PlainOnly).await;
    let relay = relay(port, Duration::from_secs(2));

    let err = relay.send(&message).await.expect_err("plain relay rejected");
    assert!(matches!(err, MailRelayError::Transport { .. }));

    let seen = next_transcript(&mut transcripts).await;
    assert!(seen.first().is_some_and(|line| line.starts_with("EHLO")));
    assert!(
        seen.iter()
            .all(|line| !line.starts_with("AUTH") && !line.starts_with("MAIL")),
        "nothing sensitive sent in clear: {seen:?}"
    );
}

#[rstest]
#[tokio::test]
async fn every_attempt_uses_its_own_connection(message: MailMessage) {
    let (port, mut transcripts) = serve(Peer::PlainOnly).await;
    let relay = relay(port, Duration::from_secs(2));

    for _ in 0..2 {
        assert!(relay.send(&message).await.is_err());
    }
    next_transcript(&mut transcripts).await;
    next_transcript(&mut transcripts).await;
    assert!(transcripts.try_recv().is_err(), "exactly two connections");
}

#[rstest]
#[tokio::test]
async fn silent_peer_times_out(message: MailMessage) {
    let (port, _transcripts) = serve(Peer::Silent).await;
    let relay = relay(port, Duration::from_millis(200));

    let outcome = tokio::time::timeout(WAIT, relay.send(&message))
        .await
        .expect("send gives up before the test does");
    assert!(matches!(outcome, Err(MailRelayError::Transport { .. })));
}

#[rstest]
#[tokio::test]
async fn unreachable_relay_is_a_transport_error(message: MailMessage) {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let port = listener.local_addr().expect("address").port();
    drop(listener);

    let outcome = relay(port, Duration::from_secs(2)).send(&message).await;
    assert!(matches!(outcome, Err(MailRelayError::Transport { .. })));
}
