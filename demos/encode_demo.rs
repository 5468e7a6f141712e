use ordkey::{bounded, fixed, End, Start};

fn main() {
    // Example: place three items in an empty list, then squeeze one in between the first two.
    let positions = bounded::insert_many(Start::ListHead, End::ListTail, 3).unwrap();
    let mut keys: Vec<String> = positions.iter().map(|&p| fixed::encode(p).unwrap()).collect();

    let between = bounded::insert(Start::Key(positions[0]), End::Key(positions[1])).unwrap();
    keys.insert(1, fixed::encode(between).unwrap());

    for key in &keys {
        let value = fixed::decode(key).unwrap();
        println!("{key}  value={value:<10}  hex={}", hex::encode(key.as_bytes()));
    }
    assert!(keys.windows(2).all(|w| w[0] < w[1]));
}
