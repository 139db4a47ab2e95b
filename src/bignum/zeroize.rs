#![cfg(feature = "zeroize")]

use super::BigNum;

impl zeroize::Zeroize for BigNum {
    fn zeroize(&mut self) {
        self.digits.zeroize();
        // Vec::zeroize leaves an empty vector; restore canonical zero.
        self.digits.push(0);
        self.negative = false;
    }
}
