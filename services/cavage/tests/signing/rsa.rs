use super::*;
use pretty_assertions::assert_eq;
use ::rsa::pkcs1v15::{Signature, VerifyingKey};
use ::rsa::pkcs8::DecodePublicKey;
use ::rsa::signature::Verifier;
use ::rsa::RsaPublicKey;
use httpsig_core::hash::base64_decode;
use test_case::test_case;

#[test_case(
    Algorithm::RsaSha1,
    "Jhv3r3VwH1rPCiKpkGp1ioxLOTXzR4Pg1WwwnqIOnBtCgpXXs6XonZTbAhpS0G/9ZmNWPbHO1IFoqB/hfnxzG8dPFvQMQwouI6FTT4Kqxz0p9olwPims/FmfV3ew/qVwhrWyqwACaARorsFxL3czkW8ZQMM9MRIJvQHNz+x8P9pPhiSt4vfZ97s0EESMyEHqSTgQOiXb4cPemLD79fJ4PIUz0ulBlTKCLsKHHht6SAEJfSyapHAyuCV9uAQpbY5dJP0NyMSKuz2v+8p4llhyrpMsXEuWhOs+++lAMM0zP8i1zBxbXsBhUH7jrJyVQ4q8DI5qP4eCl8sY1W1WcaagIg==";
    "rsa sha1"
)]
#[test_case(
    Algorithm::RsaSha256,
    "mRg0VwKM/stGL6OWecKnc9fqFGw8ArAJT/D9a/vjKYJRIvpPeMnaAUtXM3AeIQ8qKncJWl6rSDgrRYd8oQyjHO41iq9KXqa58ZEX5pf+SuYtvCEBYpZnCJ6qN0zgV4yfpr+FhkYpWzm1Z/93s0p6MqFH1W+nIAY/vZxbgol/YjVdrzTdgHkDupk6hF2SXzCud7mEMm5d6lang/d/M0J7fuTQ0Byr4WS6+CV9NJP1AlgxWe4SuS/hVZeFq830ONlqrN5KAJsBjxYR/AMCBZQgi5NI+euvFNpGR5nC2jYoQdjmXHYhNyZT0c2mf5ATdqZooPPIUErrntQSWC9IEPSNEw==";
    "rsa sha256"
)]
#[test_case(
    Algorithm::RsaSha512,
    "Q2BbWtUVy+9qsciGSLfn03t+roF8o5ewlE4pI6xfwuz2dIx7B0+Xqto38FqxqIDGD3v6YMe/GT+GUViIUdLPeh7Z6zHJ0mwxxdq13SLfS/ZWgg4eYi1R/LmC0HjsY4rsJTmW3jMAnHTKCvFBKBsS3DRr/eczNkIRb1s3Rgk/JNVBTLh6Z66N8bvTjwik/P3OlcO+ClsmtwtiKBu5mBjqaWatdxWWs5PZiCxzyzOGFzHEJfNkbVrrwtMA8KfwCw/zwZ4hnseLANui5omoUKQ4EQPzevcoxVqXXQhDlZqRVhEvXKawN0JESNkERtGLN8XQokpPbHKtgF5UlxrpUWspMA==";
    "rsa sha512"
)]
fn test_rsa_known_answer(alg: Algorithm, expected: &str) {
    for pem in [RSA_PKCS8, RSA_PKCS1] {
        let key = KeyMaterial::rsa_from_pem(pem).expect("key must parse");
        let signer = init_signer("rsa-key", key, alg).expect("signer must build");

        let mut parts = basic_request();
        signer.sign(&mut parts).expect("sign must succeed");

        assert_eq!(
            parts.headers[AUTHORIZATION]
                .to_str()
                .expect("header must be ascii"),
            format!(
                r#"Signature keyId="rsa-key",algorithm="{alg}",headers="(request-target) host date",signature="{expected}""#
            )
        );
    }
}

#[test]
fn test_rsa_sha256_verifies_with_public_key() -> Result<()> {
    let signer = init_signer(
        "rsa-key",
        KeyMaterial::rsa_from_pem(RSA_PKCS8)?,
        Algorithm::RsaSha256,
    )?;
    let mut parts = basic_request();
    signer.sign(&mut parts)?;

    let value = parts.headers[AUTHORIZATION].to_str()?;
    let raw = base64_decode(signature_param(value))?;

    let public = RsaPublicKey::from_public_key_pem(RSA_PUBLIC).expect("public key must parse");
    let signature = Signature::try_from(raw.as_slice()).expect("signature must be valid");
    VerifyingKey::<sha2::Sha256>::new(public)
        .verify(BASIC_SIGNING_STRING.as_bytes(), &signature)
        .expect("signature must verify");
    Ok(())
}
