//! End-to-end scenarios exercising the public surface the way a protocol
//! implementation would: hex in, arithmetic in the middle, hex out.

use num_traits::{One, Zero};
use rand::SeedableRng;
use rand_xorshift::XorShiftRng;

use bignum::{BigNum, Error, RandBigNum, RandPrime};

fn hex(s: &str) -> BigNum {
    BigNum::from_hex(s).unwrap()
}

#[test]
fn worked_examples() {
    assert_eq!((hex("ff") + hex("1")).to_hex(), "100");
    assert_eq!(
        (hex("ffffffffffffffff") + hex("1")).to_hex(),
        "10000000000000000"
    );
    assert_eq!((hex("123456789") * hex("abcdef")).to_hex(), "c379aaaa375de7");

    let r = hex("2").mod_pow(&hex("a"), &hex("3e8")).unwrap();
    assert_eq!(r.to_hex(), "18");

    let inv = hex("3").mod_inverse(&hex("b")).unwrap();
    assert_eq!(inv.to_hex(), "4");
    assert!((&hex("3") * &inv % &hex("b")).is_one());

    assert_eq!(hex("30").gcd(&hex("12")).to_hex(), "6");
}

#[test]
fn ring_axioms_on_random_values() {
    let mut rng = XorShiftRng::from_seed([31u8; 16]);
    for bits in [5u64, 64, 130, 700] {
        let a = rng.gen_bignum(bits);
        let b = rng.gen_bignum(bits / 2 + 1);
        let c = rng.gen_bignum(bits);

        assert_eq!(&a + &b, &b + &a);
        assert_eq!(&(&a + &b) + &c, &a + &(&b + &c));
        assert_eq!(&a * &b, &b * &a);
        assert_eq!(&(&a * &b) * &c, &a * &(&b * &c));
        assert_eq!(&a * &(&b + &c), &(&a * &b) + &(&a * &c));
    }
}

#[test]
fn division_identity_with_signs() {
    let mut rng = XorShiftRng::from_seed([33u8; 16]);
    for _ in 0..8 {
        let a = rng.gen_bignum(300);
        let b = rng.gen_bignum(90);
        for (a, b) in [(&a, &b), (&-&a, &b), (&a, &-&b), (&-&a, &-&b)] {
            let (q, r) = a.div_rem(b).unwrap();
            assert_eq!(&(&q * b) + &r, *a);
            assert!(r.abs() < b.abs());
            if !r.is_zero() {
                assert_eq!(r.is_negative(), a.is_negative());
            }
        }
    }
}

#[test]
fn codec_round_trips() {
    let mut rng = XorShiftRng::from_seed([35u8; 16]);
    for bits in [1u64, 7, 8, 64, 65, 333] {
        let a = rng.gen_bignum(bits);

        assert_eq!(BigNum::from_hex(&a.to_hex()).unwrap(), a);
        assert_eq!(BigNum::from_hex(&(-&a).to_hex()).unwrap(), -&a);
        assert_eq!(BigNum::from_bytes_be(&a.to_bytes_be()), a);
    }

    assert_eq!(BigNum::zero().to_hex(), "0");
    assert!(BigNum::from_bytes_be(&BigNum::zero().to_bytes_be()).is_zero());
}

#[test]
fn shift_round_trips() {
    let mut rng = XorShiftRng::from_seed([37u8; 16]);
    let a = rng.gen_bignum(250);
    for k in [0usize, 1, 31, 64, 100, 129] {
        assert_eq!(&(&a << k) >> k, a);
    }
}

#[test]
fn modular_arithmetic_composes() {
    // A toy Diffie-Hellman exchange over a generated prime.
    let mut rng = XorShiftRng::from_seed([39u8; 16]);
    let p = rng.gen_prime(128).unwrap();
    let g = BigNum::from(5u64);

    let secret_a = rng.gen_bignum(100);
    let secret_b = rng.gen_bignum(100);

    let pub_a = g.mod_pow(&secret_a, &p).unwrap();
    let pub_b = g.mod_pow(&secret_b, &p).unwrap();

    let shared_a = pub_b.mod_pow(&secret_a, &p).unwrap();
    let shared_b = pub_a.mod_pow(&secret_b, &p).unwrap();
    assert_eq!(shared_a, shared_b);

    // And an inverse check against the same prime.
    let x = rng.gen_bignum_range(&BigNum::one(), &p);
    let inv = x.mod_inverse(&p).unwrap();
    assert!((&x * &inv % &p).is_one());
}

#[test]
fn error_kinds_are_distinct() {
    assert_eq!(
        hex("1").div_rem(&BigNum::zero()).unwrap_err(),
        Error::DivisionByZero
    );
    assert_eq!(
        hex("2").mod_pow(&hex("2"), &BigNum::zero()).unwrap_err(),
        Error::InvalidModulus
    );
    assert_eq!(hex("6").mod_inverse(&hex("c")).unwrap_err(), Error::NotInvertible);
    assert_eq!(BigNum::from_hex("0x").unwrap_err(), Error::InvalidHex);
    assert_eq!(hex("10000000000000000").to_i64().unwrap_err(), Error::I64Overflow);
}
