//! A simple example showing the use of a Bloom filter.
use shabloom::{BloomFilter, Config};

fn main() -> shabloom::Result<()> {
    let config = Config::new(1000, 3)?;
    let mut bf = BloomFilter::new(config)?;

    bf.insert("foo");
    bf.insert("bar");

    bf.contains("foo"); // true
    bf.contains("bar"); // true
    bf.contains("baz"); // false

    bf.count(); // 2

    Ok(())
}
