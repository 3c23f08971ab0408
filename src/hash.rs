use ripemd::Ripemd160;
use sha2::{Digest, Sha256};

/// SHA256(SHA256(data))
pub fn double_sha256(data: &[u8]) -> [u8; 32] {
    Sha256::digest(Sha256::digest(data)).into()
}

/// RIPEMD160(SHA256(data)), the 20-byte digest behind legacy addresses.
pub fn hash160(data: &[u8]) -> [u8; 20] {
    Ripemd160::digest(Sha256::digest(data)).into()
}

/// First 4 bytes of `double_sha256(data)`; the Base58Check checksum.
pub fn checksum(data: &[u8]) -> [u8; 4] {
    let digest = double_sha256(data);
    [digest[0], digest[1], digest[2], digest[3]]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn double_sha256_of_hello() {
        assert_eq!(
            hex::encode(double_sha256(b"hello")),
            "9595c9df90075148eb06860365df33584b75bff782a510c6cd4883a419833d50"
        );
    }

    #[test]
    fn hash160_of_known_pubkey() {
        let pubkey = hex::decode(
            "0450863AD64A87AE8A2FE83C1AF1A8403CB53F53E486D8511DAD8A04887E5B2352\
             2CD470243453A299FA9E77237716103ABC11A1DF38855ED6F2EE187E9C582BA6",
        )
        .unwrap();
        assert_eq!(
            hex::encode_upper(hash160(&pubkey)),
            "010966776006953D5567439E5E39F86A0D273BEE"
        );
    }

    #[test]
    fn checksum_is_digest_prefix() {
        let digest = double_sha256(b"keyfmt");
        assert_eq!(checksum(b"keyfmt"), digest[..4]);
    }
}
