use intvector::IntVector;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Keep a vector sorted while inserting.
    let mut iv = IntVector::new();
    for x in [4, 23, 62, 7, 2, 7, 8, 1] {
        iv.sorted_push(x);
    }
    assert!(iv.is_sorted());
    assert_eq!(iv.first()?, 1);
    assert_eq!(iv.max(), Some((62, 7)));

    println!("median={} mean={:.3} mode={}", iv.median(), iv.mean(), iv.mode()?);

    // Round-trip through the big-endian encoding.
    let bytes = iv.encode();
    let mut restored = IntVector::new();
    restored.decode(&bytes, false)?;
    assert_eq!(iv, restored);
    println!("hash={}", restored.hash());
    Ok(())
}
