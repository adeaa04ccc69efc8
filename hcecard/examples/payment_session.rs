// Simulated reader session against both emulated applications.
//
// A channel-backed notifier plays the controlling application: it approves
// every payment request it sees. The main thread plays the reader.
//
// Usage:
//   RUST_LOG=debug cargo run -p hcecard --example payment_session

use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

use anyhow::{Context, bail};
use hcecard::prelude::*;
use hcecard::protocol::builders;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let (tx, rx) = mpsc::channel::<Event>();
    let tx = Mutex::new(tx);
    let notifier = move |event: Event| {
        if let Ok(tx) = tx.lock() {
            let _ = tx.send(event);
        }
    };

    let emulator = Emulator::builder()
        .with_notifier(Arc::new(notifier))
        .with_options(Options::new().with_decision_timeout(Duration::from_secs(5)))
        .build();
    emulator.controller().set_ndef_text("Hello from hcecard")?;

    // controlling application
    let controller = emulator.controller().clone();
    let app = thread::spawn(move || {
        for event in rx {
            println!("app <- {}", event.name());
            if let Event::PaymentRequested { payload } = event {
                println!("app: approving {}", payload);
                controller.submit_decision(true, br#"{"status":"approved"}"#.to_vec());
            }
        }
    });

    println!("=== NDEF tag ===");
    let tag = emulator
        .service_for(Aid::NDEF.as_bytes())
        .context("no service for the NDEF AID")?;
    exchange(tag.as_ref(), &builders::select_application(Aid::NDEF))?;
    exchange(tag.as_ref(), &builders::select_file(FileId::CAPABILITY_CONTAINER))?;
    exchange(tag.as_ref(), &builders::read_binary(0, 15))?;
    exchange(tag.as_ref(), &builders::select_file(FileId::NDEF))?;
    // TLV tag and length first, then the message plus terminator
    let head = exchange(tag.as_ref(), &builders::read_binary(0, 3))?;
    let [_, hi, lo] = head[..] else {
        bail!("unexpected NDEF file head: {}", Hex(&head));
    };
    let len = u16::from_be_bytes([hi, lo]).saturating_add(1).min(0xFF) as u8;
    let message = exchange(tag.as_ref(), &builders::read_binary(3, len))?;
    println!("reader: NDEF message {}", Hex(&message));
    tag.on_deactivated(DeactivationReason::Deselected);

    println!("\n=== Payment ===");
    let payment = emulator
        .service_for(Aid::PAYMENT.as_bytes())
        .context("no service for the payment AID")?;
    exchange(payment.as_ref(), &builders::select_application(Aid::PAYMENT))?;
    let answer = exchange(
        payment.as_ref(),
        &builders::payment(br#"{"amount":"12.50","currency":"EUR"}"#),
    )?;
    println!("reader: decision = {}", String::from_utf8_lossy(&answer));
    payment.on_deactivated(DeactivationReason::LinkLoss);

    drop(emulator);
    drop(payment);
    app.join().map_err(|_| anyhow::anyhow!("application thread panicked"))?;
    Ok(())
}

/// Send one command and return the body of a successful answer.
fn exchange(service: &dyn HostApduService, apdu: &[u8]) -> anyhow::Result<Vec<u8>> {
    println!("reader -> {}", Hex(apdu));
    let raw = service.process_command_apdu(apdu);
    println!("reader <- {}", Hex(&raw));

    let Some(response) = Response::parse(&raw) else {
        bail!("short response: {}", Hex(&raw));
    };
    if !response.status_word().is_success() {
        bail!("card answered {}", response.status_word());
    }
    Ok(response.data().to_vec())
}
