use super::*;
use crate::params::{MODP_2048_BYTE_LENGTH, MODP_2048_PRIME, MODP_3072_BYTE_LENGTH};
use rand::rngs::OsRng;

#[test]
fn dh2k_agreement_is_commutative() {
    let alice = ModpDh::generate(ModpGroup::dh2k(), &mut OsRng).unwrap();
    let bob = ModpDh::generate(ModpGroup::dh2k(), &mut OsRng).unwrap();

    let s1 = alice.agree(&bob.public_key_bytes()).unwrap();
    let s2 = bob.agree(&alice.public_key_bytes()).unwrap();

    assert_eq!(&*s1, &*s2);
    assert_eq!(s1.len(), MODP_2048_BYTE_LENGTH);
}

#[test]
fn dh3k_agreement_is_commutative() {
    let alice = ModpDh::generate(ModpGroup::dh3k(), &mut OsRng).unwrap();
    let bob = ModpDh::generate(ModpGroup::dh3k(), &mut OsRng).unwrap();

    let s1 = alice.agree(&bob.public_key_bytes()).unwrap();
    let s2 = bob.agree(&alice.public_key_bytes()).unwrap();

    assert_eq!(&*s1, &*s2);
    assert_eq!(s1.len(), MODP_3072_BYTE_LENGTH);
}

#[test]
fn public_key_serialization_is_fixed_width_and_deterministic() {
    let dh = ModpDh::generate(ModpGroup::dh2k(), &mut OsRng).unwrap();
    let first = dh.public_key_bytes();
    let second = dh.public_key_bytes();

    assert_eq!(first.len(), MODP_2048_BYTE_LENGTH);
    assert_eq!(first, second);
    assert_eq!(BigUint::from_bytes_be(&first), dh.public);
}

#[test]
fn degenerate_peer_values_are_rejected() {
    let dh = ModpDh::generate(ModpGroup::dh2k(), &mut OsRng).unwrap();

    // value == 1
    let mut one = vec![0u8; MODP_2048_BYTE_LENGTH];
    one[MODP_2048_BYTE_LENGTH - 1] = 1;
    assert!(!dh.validate_peer_key(&one));

    // value == P - 1
    let prime_minus_one = BigUint::from_bytes_be(&MODP_2048_PRIME) - 1u32;
    let encoded = to_fixed_width_be(&prime_minus_one, MODP_2048_BYTE_LENGTH);
    assert!(!dh.validate_peer_key(&encoded));
}

#[test]
fn genuine_public_keys_pass_validation() {
    let alice = ModpDh::generate(ModpGroup::dh2k(), &mut OsRng).unwrap();
    let bob = ModpDh::generate(ModpGroup::dh2k(), &mut OsRng).unwrap();
    assert!(alice.validate_peer_key(&bob.public_key_bytes()));
}

#[test]
fn wrong_length_peer_values_are_rejected() {
    let dh = ModpDh::generate(ModpGroup::dh2k(), &mut OsRng).unwrap();

    assert!(!dh.validate_peer_key(&[0u8; MODP_2048_BYTE_LENGTH - 1]));
    assert!(!dh.validate_peer_key(&[]));

    let err = dh.agree(&[0u8; 16]).unwrap_err();
    assert_eq!(
        err,
        Error::InvalidLength {
            context: "MODP agreement",
            expected: MODP_2048_BYTE_LENGTH,
            actual: 16,
        }
    );
}

#[test]
fn fixed_width_export_pads_leading_zeros() {
    let value = BigUint::from(0x0102u32);
    let bytes = to_fixed_width_be(&value, 8);
    assert_eq!(bytes, [0, 0, 0, 0, 0, 0, 0x01, 0x02]);

    let zero = BigUint::from(0u32);
    assert_eq!(to_fixed_width_be(&zero, 4), [0, 0, 0, 0]);
}
