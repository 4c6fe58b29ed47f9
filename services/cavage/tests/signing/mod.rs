mod ecdsa;
mod hmac;
mod rsa;

use super::*;
use http::header::{AUTHORIZATION, DATE, HOST};
use httpsig_core::{ErrorKind, SigningRequest};
use log::debug;
use pretty_assertions::assert_eq;
use std::sync::Arc;

#[test]
fn test_sign_keeps_request_headers() -> Result<()> {
    let signer = init_signer("k1", KeyMaterial::hmac("secret"), Algorithm::HmacSha256)?;

    let mut parts = basic_request();
    parts.headers.insert("x-trace", "abc".parse()?);
    signer.sign(&mut parts)?;
    debug!("signed request: {parts:?}");

    assert_eq!(parts.headers[DATE], FIXED_DATE);
    assert_eq!(parts.headers["x-trace"], "abc");
    // host is signed from the URI without being added to the request.
    assert!(!parts.headers.contains_key(HOST));
    Ok(())
}

#[test]
fn test_sign_missing_header_leaves_request_untouched() -> Result<()> {
    let signer = Signer::new(
        HeaderSigner::builder("k1", KeyMaterial::hmac("secret"))
            .headers(["(request-target)", "date", "digest"])
            .build()?,
    );

    let mut parts = basic_request();
    let err = signer.sign(&mut parts).expect_err("digest is missing");
    assert_eq!(err.kind(), ErrorKind::MissingHeader);
    assert_eq!(err.header_name(), Some("digest"));
    assert!(!parts.headers.contains_key(AUTHORIZATION));
    assert_eq!(parts.headers.len(), 1);
    Ok(())
}

#[test]
fn test_missing_host_without_authority() -> Result<()> {
    let signer = Signer::new(
        HeaderSigner::builder("k1", KeyMaterial::hmac("secret"))
            .headers(["host", "date"])
            .build()?,
    );

    let req = SigningRequest::new(http::Method::GET, "/").with_header("Date", FIXED_DATE)?;
    let err = signer.sign_request(&req).expect_err("host is unknown");
    assert_eq!(err.kind(), ErrorKind::MissingHeader);
    assert_eq!(err.header_name(), Some("host"));
    Ok(())
}

#[test]
fn test_header_order_is_signed_order() -> Result<()> {
    let key = KeyMaterial::hmac("secret");
    let forward = Signer::new(
        HeaderSigner::builder("k1", key.clone())
            .headers(["host", "date"])
            .build()?,
    );
    let backward = Signer::new(
        HeaderSigner::builder("k1", key)
            .headers(["date", "host"])
            .build()?,
    );

    let mut a = basic_request();
    forward.sign(&mut a)?;
    let mut b = basic_request();
    backward.sign(&mut b)?;

    let a = a.headers[AUTHORIZATION].to_str()?.to_string();
    let b = b.headers[AUTHORIZATION].to_str()?.to_string();
    assert!(a.contains(r#"headers="host date""#), "{a}");
    assert!(b.contains(r#"headers="date host""#), "{b}");
    assert_ne!(signature_param(&a), signature_param(&b));
    Ok(())
}

#[test]
fn test_sign_concurrently() -> Result<()> {
    let signer = Arc::new(init_signer(
        "rsa-key",
        KeyMaterial::rsa_from_pem(RSA_PKCS8)?,
        Algorithm::RsaSha256,
    )?);

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let signer = signer.clone();
            std::thread::spawn(move || -> httpsig_core::Result<String> {
                let mut parts = basic_request();
                signer.sign(&mut parts)?;
                Ok(parts.headers[AUTHORIZATION].to_str()?.to_string())
            })
        })
        .collect();

    let mut values = Vec::new();
    for handle in handles {
        values.push(handle.join().expect("thread must not panic")?);
    }
    values.dedup();
    assert_eq!(values.len(), 1);
    Ok(())
}
