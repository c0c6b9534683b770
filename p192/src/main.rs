//! Demo: generate a P-192 key pair, sign a fixed message and verify it.
//!
//! Exits with status 0 when the signature verifies and 1 otherwise.

use p192_ecdsa::{
    Event, KeyPairGenerator, NistP192, Result, RngSource, Signer, Verdict, Verifier,
};
use rand_core::OsRng;
use std::process::ExitCode;

const MESSAGE: &str = "Hello, world!";

fn main() -> ExitCode {
    match run() {
        Ok(Verdict::Valid) => ExitCode::SUCCESS,
        Ok(Verdict::Invalid) => ExitCode::FAILURE,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<Verdict> {
    let mut rng = RngSource::new(OsRng);

    let key_pair = KeyPairGenerator::<NistP192>::new().generate(&mut rng)?;
    let public_key = key_pair.public_key().as_affine();

    if let Some((x, y)) = public_key.coordinates() {
        println!("public key: ({x:x}, {y:x})");
    }

    let signature = Signer::new(key_pair.private_key())
        .with_observer(print_event)
        .sign(&mut rng, MESSAGE.as_bytes())?;
    println!("signature (r, s): ({:x}, {:x})", signature.r(), signature.s());

    let verdict = Verifier::new(key_pair.public_key())
        .with_observer(print_event)
        .verify(MESSAGE.as_bytes(), &signature)?;

    match verdict {
        Verdict::Valid => println!("signature is valid"),
        Verdict::Invalid => println!("signature is invalid"),
    }

    Ok(verdict)
}

fn print_event(event: &Event<'_>) {
    match event {
        Event::SignAttempt { r, s: None, .. } => println!("sign: rejected r = {r:x}"),
        Event::SignAttempt { r, s: Some(s), .. } => println!("sign: r = {r:x}, s = {s:x}"),
        Event::VerifyStep {
            z, w, u1, u2, r_point, ..
        } => {
            println!("verify: z = {z:x}");
            println!("verify: w = {w:x}");
            println!("verify: u1 = {u1:x}, u2 = {u2:x}");

            match r_point {
                Some((x, y)) => println!("verify: R = ({x:x}, {y:x})"),
                None => println!("verify: R = identity"),
            }
        }
        _ => {}
    }
}
