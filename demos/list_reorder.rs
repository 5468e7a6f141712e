use ordkey::{End, Inserter, Start};

fn main() {
    // Example: keep a to-do list ordered by key while moving items around.
    let ins = Inserter::default();

    let mut list: Vec<(String, &str)> = ins
        .insert(Start::ListHead, End::ListTail, 3)
        .unwrap()
        .into_iter()
        .zip(["write", "review", "ship"])
        .collect();

    // Move "ship" to the front: new key before the current first item.
    let front = ins.insert_one(Start::ListHead, End::Key(list[0].0.as_str())).unwrap();
    list[2].0 = front;

    // Insert "test" between "write" and "review".
    let mid = ins
        .insert_one(Start::Key(list[0].0.as_str()), End::Key(list[1].0.as_str()))
        .unwrap();
    list.push((mid, "test"));

    list.sort();
    for (key, item) in &list {
        println!("{key:>4}  {item}");
    }
}
