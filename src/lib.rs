//! # arenalloc - A Segregated-Free-List Arena Allocator
//!
//! This crate provides a single-arena, single-threaded heap allocator that
//! implements `malloc`/`free`/`realloc` semantics over a region of memory
//! supplied by the caller, rather than one it requests from the OS itself.
//!
//! ## Overview
//!
//! ```text
//!   Arena Memory Layout:
//!
//!   ┌──────────────────────────────────────────────────────────────────────┐
//!   │                    CALLER-SUPPLIED REGION                           │
//!   │                                                                      │
//!   │   ┌─────┬─────┬─────┬─────┬───────────────────────────────────────┐  │
//!   │   │ B1  │ B2  │ B3  │ B4  │            Untouched Space            │  │
//!   │   └─────┴─────┴─────┴─────┴───────────────────────────────────────┘  │
//!   │                           ▲                                     ▲    │
//!   │                           │                                     │    │
//!   │                       Frontier                              End of   │
//!   │                     (`used` bytes)                           Region  │
//!   │                                                                      │
//!   └──────────────────────────────────────────────────────────────────────┘
//!
//!   New blocks bump the frontier forward. Freed blocks that sit below the
//!   frontier go into one of three size-segregated free lists instead, and
//!   get reused by later allocations before the frontier moves again.
//! ```
//!
//! ## Crate Structure
//!
//! ```text
//!   arenalloc
//!   ├── align      - Alignment macro (align_up_8!)
//!   ├── block      - Block header layout (internal)
//!   ├── free_list  - Size-tiered free lists (internal)
//!   └── arena      - Arena: the public allocator
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use arenalloc::Arena;
//!
//! fn main() {
//!     let mut region = vec![0u8; 4096];
//!     let mut arena = Arena::new();
//!
//!     unsafe {
//!         arena.init(&mut region);
//!
//!         let ptr = arena.allocate(64) as *mut u64;
//!         *ptr = 42;
//!         println!("Value: {}", *ptr);
//!
//!         arena.free(ptr as *mut u8);
//!     }
//! }
//! ```
//!
//! ## How It Works
//!
//! Every block, used or free, carries an in-band header immediately before
//! its payload:
//!
//! ```text
//!   Single Block:
//!   ┌───────────────────────┬────────────────────────────────┐
//!   │     Block Header       │         Payload                │
//!   │  ┌──────────────────┐  │                                │
//!   │  │ size             │  │  ┌──────────────────────────┐  │
//!   │  │ used             │  │  │                          │  │
//!   │  │ prev_used        │  │  │    size - header bytes   │  │
//!   │  │ prev_physical    │  │  │                          │  │
//!   │  │ next / prev      │  │  └──────────────────────────┘  │
//!   │  └──────────────────┘  │                                │
//!   └───────────────────────┴────────────────────────────────┘
//!                            ▲
//!                            └── Pointer returned to caller
//! ```
//!
//! Allocation first searches the free lists (small/medium/large, by payload
//! size) starting at the tier matching the request, falling back to bumping
//! the frontier when nothing fits. Freeing a block coalesces it with any
//! free physical neighbor, and retreats the frontier instead of reinserting
//! into a free list when the freed block was the topmost one in the arena.
//!
//! ## Limitations
//!
//! - **Single-threaded only**: no synchronization primitives.
//! - **Single arena**: one region, one `Arena` value; no global allocator
//!   hookup.
//! - **8-byte alignment only**: payload pointers are always 8-byte aligned,
//!   nothing stricter.
//!
//! ## Safety
//!
//! This crate is inherently unsafe as it deals with raw memory management.
//! All allocation and deallocation operations require `unsafe` blocks, and
//! callers are responsible for upholding the contracts documented on
//! [`Arena::allocate`], [`Arena::free`], and [`Arena::reallocate`].

pub mod align;
mod block;
mod free_list;
mod arena;

pub use arena::Arena;
