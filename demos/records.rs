//! Records Example
//!
//! Encodes records into documents and files them under their keys, the way a
//! client of an embedded document store would.
//!
//! Run with: cargo run --example records --features json,tracing

use std::collections::BTreeMap;

use quiver::record::{Address, Document, Key, User};
use quiver::{Either, Fault};

fn put<R>(db: &mut BTreeMap<String, Vec<u8>>, record: &R) -> Either<Fault, String>
where
    R: quiver::record::Record + serde::Serialize,
{
    Document::encode(record).map(|doc| {
        let key = doc.key().to_string();
        db.insert(key.clone(), doc.body().to_vec());
        key
    })
}

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing_subscriber::filter::LevelFilter::TRACE)
        .init();

    let mut db = BTreeMap::new();

    let berlin = Address::new("uid-berlin", "Berlin");
    let paris = Address::new("uid-paris", "Paris");
    let key_berlin = put(&mut db, &berlin);
    let key_paris = put(&mut db, &paris);
    println!("{key_berlin}");
    println!("{key_paris}");

    let user = User::new("uid-ada", "Ada", "Lovelace", Key::of(&berlin));
    match Document::encode(&user) {
        Either::Right(doc) => {
            println!("{} -> {}", doc.key(), doc.json());
            for index in doc.indexes() {
                println!("  index {} = {:?}", index.name, index.values);
            }
            let back = doc.decode();
            println!("decoded equals original: {}", back == Either::Right(user));
        }
        Either::Left(fault) => println!("encode failed: {fault}"),
    }

    let stored = db
        .get(&Key::of(&paris).to_string())
        .map(|bytes| Document::<Address>::from_parts(Key::of(&paris), bytes.clone(), Vec::new()));
    if let Some(doc) = stored {
        println!("read back: {}", doc.decode().map(|a| a.city).get_or_else(String::new));
    }
}
