//! Demonstrates constructing a cipher and round-tripping a published vector.

use present_core::Cipher;

fn main() {
    let key = [0u8; 10];
    let cipher = Cipher::new(&key).unwrap();

    let plaintext = [0u8; 8];
    let ciphertext = cipher.encrypt_block(&plaintext);
    assert_eq!(ciphertext, [0x55, 0x79, 0xc1, 0x38, 0x7b, 0x22, 0x84, 0x45]);
    assert_eq!(cipher.decrypt_block(&ciphertext), plaintext);

    println!("example succeeded; ciphertext matches the published vector");
}
