//! Walks a `GrowVec` through every construction, assignment, and
//! mutation path, printing intermediate state after each step via the
//! default stdout sink.

use growvec::GrowVec;

fn main() {
    println!("-- standard construction and append --");
    let mut n = GrowVec::named("nora");
    n.print();
    n.push(3);
    n.push(56);
    n.print();

    println!("\n-- explicit resizing --");
    let mut k = GrowVec::named("kara");
    k.print();
    k.resize(5);
    k.print();
    for v in [1, 2, 3, 4, 5, 6] {
        k.push(v);
    }
    // The sixth append overflowed the resized block and grew it again.
    k.print();

    println!("\n-- duplication --");
    let mut m = n.duplicate();
    m.rename("mara");
    m.push(9);
    m.push(7);
    m.print();

    n.push(1);
    n.push(2);
    n.print();

    println!("\n-- element-wise addition --");
    let mut o = &n + &m;
    o.rename("orla");
    o.print();

    println!("\n-- copy assignment --");
    m.print();
    m.assign(o.duplicate());
    m.print();

    println!("\n-- move assignment --");
    let mut p = GrowVec::named("pia");
    p.assign(n.combine(&o));
    n.print();
    o.print();
    p.print();

    println!("\n-- ownership transfer --");
    let taken = k.transfer();
    k.print();
    taken.print();

    println!("\n-- incompatible addition --");
    let fallback = p.combine(&k);
    fallback.print();

    println!("\n-- end of demonstration --");
}
