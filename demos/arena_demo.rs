use std::ptr;

use arenalloc::Arena;

/// Prints where the frontier currently sits relative to the region.
fn print_frontier(label: &str, arena: &Arena) {
  println!(
    "[{}] used = {} / {} bytes",
    label,
    arena.used(),
    arena.capacity()
  );
}

fn main() {
  // The arena never talks to the OS; the caller owns the backing bytes
  // and hands them over once via `init`.
  let mut region = vec![0u8; 4096];
  let mut arena = Arena::new();

  unsafe {
    arena.init(&mut region);
    print_frontier("start", &arena);

    // ------------------------------------------------------------------
    // 1) Allocate space for a u32.
    // ------------------------------------------------------------------
    let first_block = arena.allocate(4);
    println!("\n[1] Allocate 4 bytes -> {:?}", first_block);

    let first_ptr = first_block as *mut u32;
    first_ptr.write(0xDEADBEEF);
    println!("[1] Value written to first_block = 0x{:X}", first_ptr.read());
    print_frontier("1", &arena);

    // ------------------------------------------------------------------
    // 2) Allocate 12 odd-sized bytes.
    // ------------------------------------------------------------------
    let second_block = arena.allocate(12);
    println!("\n[2] Allocate [u8; 12] -> {:?}", second_block);
    ptr::write_bytes(second_block, 0xAB, 12);
    println!("[2] Initialized second block with 0xAB");
    print_frontier("2", &arena);

    // ------------------------------------------------------------------
    // 3) Allocate a u64 to show 8-byte alignment.
    // ------------------------------------------------------------------
    let third_block = arena.allocate(8);
    println!("\n[3] Allocate u64 (observe alignment)");
    let third_ptr = third_block as *mut u64;
    third_ptr.write(0x1122334455667788);
    println!(
      "[3] Address = {:#x}, addr % 8 = {}",
      third_block as usize,
      third_block as usize % 8
    );
    print_frontier("3", &arena);

    // ------------------------------------------------------------------
    // 4) Free the first block and watch it land on a free list rather
    //    than retreating the frontier (it isn't the topmost block).
    // ------------------------------------------------------------------
    arena.free(first_block);
    println!("\n[4] Freed first_block; frontier does not move since it wasn't topmost");
    print_frontier("4", &arena);

    // ------------------------------------------------------------------
    // 5) Allocate something small enough to reuse the freed block.
    // ------------------------------------------------------------------
    let fourth_block = arena.allocate(4);
    println!("\n[5] Allocate 4 bytes again");
    println!(
      "[5] fourth_block == first_block? {}",
      if fourth_block == first_block {
        "yes, the free list handed the same block back"
      } else {
        "no, it came from elsewhere"
      }
    );
    print_frontier("5", &arena);

    // ------------------------------------------------------------------
    // 6) Free the topmost block and watch the frontier retreat.
    // ------------------------------------------------------------------
    let used_before_free = arena.used();
    arena.free(third_block);
    println!("\n[6] Freed the topmost block (third_block)");
    println!(
      "[6] frontier retreated by {} bytes",
      used_before_free - arena.used()
    );
    print_frontier("6", &arena);

    // ------------------------------------------------------------------
    // 7) Grow an allocation via realloc, forward-coalescing into a
    //    freed neighbor instead of copying.
    // ------------------------------------------------------------------
    arena.free(second_block);
    let grown = arena.reallocate(fourth_block, 40);
    println!("\n[7] Grew fourth_block to 40 bytes via realloc");
    println!(
      "[7] same pointer after growth? {}",
      if grown == fourth_block { "yes, grew in place" } else { "no, moved" }
    );
    print_frontier("7", &arena);

    // ------------------------------------------------------------------
    // 8) End of demo: reset hands the whole region back at once.
    // ------------------------------------------------------------------
    arena.reset();
    println!("\n[8] Reset the arena; every block above is now invalid");
    print_frontier("8", &arena);
  }
}
