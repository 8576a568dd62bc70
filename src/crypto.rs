//! RSA-OAEP encryption of exchange credentials.
//!
//! The server hands out its public key as PEM over `GET
//! /security/get-public-key`; each secret is encrypted independently with
//! OAEP over SHA-256 and base64-encoded before submission. OAEP is
//! randomized, so repeated encryptions of the same plaintext differ.

use anyhow::{anyhow, Context, Result};
use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use rsa::pkcs1::DecodeRsaPublicKey;
use rsa::pkcs8::DecodePublicKey;
use rsa::{Oaep, RsaPublicKey};
use sha2::Sha256;
use uuid::Uuid;

use crate::api::UserKeysRequest;

/// The three secrets an exchange account needs. Never persisted; lives only
/// long enough to build one request.
#[derive(Debug, Clone)]
pub struct CredentialSet {
    pub api_key: String,
    pub secret_key: String,
    pub passphrase: String,
}

/// Server docs advertise an SPKI PEM ("BEGIN PUBLIC KEY"); older clients
/// were handed PKCS#1 ("BEGIN RSA PUBLIC KEY"). Accept both.
pub fn parse_public_key(pem: &str) -> Result<RsaPublicKey> {
    if let Ok(key) = RsaPublicKey::from_public_key_pem(pem) {
        return Ok(key);
    }
    RsaPublicKey::from_pkcs1_pem(pem).context("invalid RSA public key PEM")
}

pub fn encrypt_parameter(key: &RsaPublicKey, plaintext: &str) -> Result<String> {
    let mut rng = rand::thread_rng();
    let ciphertext = key
        .encrypt(&mut rng, Oaep::new::<Sha256>(), plaintext.as_bytes())
        .map_err(|e| anyhow!("RSA-OAEP encryption failure: {:?}", e))?;
    Ok(BASE64.encode(ciphertext))
}

pub fn encrypt_credentials(
    key: &RsaPublicKey,
    account_id: Uuid,
    credentials: &CredentialSet,
) -> Result<UserKeysRequest> {
    Ok(UserKeysRequest {
        account_id,
        encrypted_apikey: encrypt_parameter(key, &credentials.api_key)?,
        encrypted_secret_key: encrypt_parameter(key, &credentials.secret_key)?,
        encrypted_passphrase: encrypt_parameter(key, &credentials.passphrase)?,
    })
}
