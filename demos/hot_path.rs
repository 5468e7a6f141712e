use bytes::BytesMut;
use ordkey::{bounded, fixed, End, Start};
use std::time::Instant;

fn main() {
    // Example: lay out a large list's keys back to back in one buffer.
    // This pattern avoids a String allocation per key.

    let items = 1_000_000;
    let positions = bounded::insert_many(Start::ListHead, End::ListTail, items).unwrap();
    let mut buf = BytesMut::with_capacity(items * fixed::KEY_LEN);

    let start = Instant::now();

    for &p in &positions {
        fixed::encode_into(&mut buf, p).unwrap();
    }

    let duration = start.elapsed();
    let bytes = buf.freeze();

    println!("Encoded {} keys into {} bytes", items, bytes.len());
    println!("Total time: {:?}", duration);
    println!(
        "Average: {:.2} ns/key",
        duration.as_nanos() as f64 / items as f64
    );
    println!();
    println!("First key: {}", String::from_utf8_lossy(&bytes[..fixed::KEY_LEN]));
    println!("Last key:  {}", String::from_utf8_lossy(&bytes[bytes.len() - fixed::KEY_LEN..]));
}
