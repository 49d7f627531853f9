//! A pure Rust implementation of the [BLAKE3] cryptographic hash function.
//!
//! BLAKE3 hashes its input as a binary Merkle tree of 1024-byte chunks, which
//! gives it an incremental state that is cheap to keep and an output that can
//! be extended to any length. This crate implements the sequential algorithm:
//! the compression function, the chunk state machine, the subtree merge
//! stack, and root output expansion, in all three operating modes (plain
//! hashing, keyed hashing, and key derivation).
//!
//! # Examples
//!
//! ```
//! // Hash an input all at once.
//! let hash1 = b3hash::hash(b"foobarbaz");
//!
//! // Hash an input incrementally.
//! let mut hasher = b3hash::Hasher::new();
//! hasher.update(b"foo");
//! hasher.update(b"bar");
//! hasher.update(b"baz");
//! assert_eq!(hasher.finalize(), hash1);
//!
//! // Extended output. Shorter outputs are prefixes of longer ones.
//! let mut output = [0; 1000];
//! hasher.finalize_into(&mut output);
//! assert_eq!(hash1, output[..32]);
//!
//! // Print a hash as lowercase hexadecimal.
//! println!("{}", hash1);
//! ```
//!
//! # Cargo Features
//!
//! The `std` feature (the only feature, enabled by default) is required for
//! the allocating output methods [`Hasher::digest`] and [`Hasher::hex_digest`],
//! for [`Hasher::update_reader`], and for the [`Write`] implementation. With
//! the feature disabled the crate is `no_std`; hashing and [`Hasher::finalize_into`]
//! work unchanged.
//!
//! [BLAKE3]: https://blake3.io
//! [`Write`]: https://doc.rust-lang.org/std/io/trait.Write.html

#![cfg_attr(not(feature = "std"), no_std)]


mod compress;
mod io;
mod words;

use arrayref::array_ref;
use arrayvec::{ArrayString, ArrayVec};
use core::cmp;
use core::fmt;

/// The number of bytes in a [`Hash`], 32.
pub const OUT_LEN: usize = 32;

/// The number of bytes in a key, 32.
pub const KEY_LEN: usize = 32;

const BLOCK_LEN: usize = 64;
const CHUNK_LEN: usize = 1024;
const MAX_DEPTH: usize = 54; // 2^54 chunks * 2^10 bytes per chunk = 2^64 bytes

// While a chunk is being filled, its chaining value stays in word form, so
// each block compression costs no endianness conversions on the way in or
// out. Bytes appear only at the caller boundary and inside parent blocks.
type CVWords = [u32; 8];
type CVBytes = [u8; 32]; // little-endian
type BlockWords = [u32; 16];

const IV: &CVWords = &[
    0x6A09E667, 0xBB67AE85, 0x3C6EF372, 0xA54FF53A, 0x510E527F, 0x9B05688C, 0x1F83D9AB, 0x5BE0CD19,
];

// Applied to the 16 message words between compression rounds. Repeated
// application produces the full 7-round schedule.
const MSG_PERMUTATION: [usize; 16] = [2, 6, 3, 10, 7, 0, 4, 13, 1, 11, 12, 5, 9, 14, 15, 8];

// Domain separation flags. CHUNK_START and CHUNK_END mark a chunk's first and
// last blocks, PARENT marks interior tree nodes, ROOT marks the one node
// whose output leaves the tree, and the remaining three fix the operating
// mode for the life of a hasher.
const CHUNK_START: u8 = 1 << 0;
const CHUNK_END: u8 = 1 << 1;
const PARENT: u8 = 1 << 2;
const ROOT: u8 = 1 << 3;
const KEYED_HASH: u8 = 1 << 4;
const DERIVE_KEY_CONTEXT: u8 = 1 << 5;
const DERIVE_KEY_MATERIAL: u8 = 1 << 6;

#[inline]
fn counter_low(counter: u64) -> u32 {
    counter as u32
}

#[inline]
fn counter_high(counter: u64) -> u32 {
    (counter >> 32) as u32
}

/// An output of the default size, 32 bytes, which provides constant-time
/// equality checking.
///
/// `Hash` implements [`From`] and [`Into`] for `[u8; 32]`, and it provides
/// [`from_bytes`](#method.from_bytes) and [`as_bytes`](#method.as_bytes) for
/// explicit conversions between itself and `[u8; 32]`. However, byte arrays
/// and slices don't provide constant-time equality checking, which is often a
/// security requirement in software that handles private data. `Hash` doesn't
/// implement [`Deref`] or [`AsRef`], to avoid situations where a type
/// conversion happens implicitly and the constant-time property is
/// accidentally lost.
///
/// `Hash` provides the [`to_hex`](#method.to_hex) and
/// [`from_hex`](#method.from_hex) methods for converting to and from
/// hexadecimal. It also implements [`Display`] and [`FromStr`].
///
/// [`From`]: https://doc.rust-lang.org/std/convert/trait.From.html
/// [`Into`]: https://doc.rust-lang.org/std/convert/trait.Into.html
/// [`Deref`]: https://doc.rust-lang.org/stable/std/ops/trait.Deref.html
/// [`AsRef`]: https://doc.rust-lang.org/std/convert/trait.AsRef.html
/// [`Display`]: https://doc.rust-lang.org/std/fmt/trait.Display.html
/// [`FromStr`]: https://doc.rust-lang.org/std/str/trait.FromStr.html
#[derive(Clone, Copy, Hash)]
pub struct Hash([u8; OUT_LEN]);

impl Hash {
    /// The raw bytes of the `Hash`. Note that byte arrays don't provide
    /// constant-time equality checking, so if you need to compare hashes,
    /// prefer the `Hash` type.
    #[inline]
    pub const fn as_bytes(&self) -> &[u8; OUT_LEN] {
        &self.0
    }

    /// Create a `Hash` from its raw bytes representation.
    pub const fn from_bytes(bytes: [u8; OUT_LEN]) -> Self {
        Self(bytes)
    }

    /// Encode a `Hash` in lowercase hexadecimal.
    ///
    /// The returned [`ArrayString`] is a fixed size and doesn't allocate
    /// memory on the heap. Note that [`ArrayString`] doesn't provide
    /// constant-time equality checking, so if you need to compare hashes,
    /// prefer the `Hash` type.
    ///
    /// [`ArrayString`]: https://docs.rs/arrayvec/latest/arrayvec/struct.ArrayString.html
    pub fn to_hex(&self) -> ArrayString<{ 2 * OUT_LEN }> {
        let mut s = ArrayString::new();
        let table = b"0123456789abcdef";
        for &b in self.0.iter() {
            s.push(table[(b >> 4) as usize] as char);
            s.push(table[(b & 0xf) as usize] as char);
        }
        s
    }

    /// Decode a `Hash` from hexadecimal. Both uppercase and lowercase ASCII
    /// bytes are supported.
    ///
    /// Any byte outside the ranges `'0'...'9'`, `'a'...'f'`, and `'A'...'F'`
    /// results in an error. An input length other than 64 also results in an
    /// error.
    ///
    /// Note that `Hash` also implements `FromStr`, so `Hash::from_hex("...")`
    /// is equivalent to `"...".parse()`.
    pub fn from_hex(hex: impl AsRef<[u8]>) -> Result<Self, HexError> {
        fn hex_val(byte: u8) -> Result<u8, HexError> {
            match byte {
                b'A'..=b'F' => Ok(byte - b'A' + 10),
                b'a'..=b'f' => Ok(byte - b'a' + 10),
                b'0'..=b'9' => Ok(byte - b'0'),
                _ => Err(HexError(HexErrorInner::InvalidByte(byte))),
            }
        }
        let hex_bytes: &[u8] = hex.as_ref();
        if hex_bytes.len() != OUT_LEN * 2 {
            return Err(HexError(HexErrorInner::InvalidLen(hex_bytes.len())));
        }
        let mut hash_bytes: [u8; OUT_LEN] = [0; OUT_LEN];
        for i in 0..OUT_LEN {
            hash_bytes[i] = 16 * hex_val(hex_bytes[2 * i])? + hex_val(hex_bytes[2 * i + 1])?;
        }
        Ok(Hash::from(hash_bytes))
    }
}

impl From<[u8; OUT_LEN]> for Hash {
    #[inline]
    fn from(bytes: [u8; OUT_LEN]) -> Self {
        Self::from_bytes(bytes)
    }
}

impl From<Hash> for [u8; OUT_LEN] {
    #[inline]
    fn from(hash: Hash) -> Self {
        hash.0
    }
}

impl core::str::FromStr for Hash {
    type Err = HexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Hash::from_hex(s)
    }
}

/// This implementation is constant-time.
impl PartialEq for Hash {
    #[inline]
    fn eq(&self, other: &Hash) -> bool {
        constant_time_eq::constant_time_eq_32(&self.0, &other.0)
    }
}

/// This implementation is constant-time.
impl PartialEq<[u8; OUT_LEN]> for Hash {
    #[inline]
    fn eq(&self, other: &[u8; OUT_LEN]) -> bool {
        constant_time_eq::constant_time_eq_32(&self.0, other)
    }
}

/// This implementation is constant-time if the target is 32 bytes long.
impl PartialEq<[u8]> for Hash {
    #[inline]
    fn eq(&self, other: &[u8]) -> bool {
        constant_time_eq::constant_time_eq(&self.0, other)
    }
}

impl Eq for Hash {}

impl fmt::Display for Hash {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.to_hex().as_str())
    }
}

impl fmt::Debug for Hash {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_tuple("Hash").field(&self.to_hex().as_str()).finish()
    }
}

/// The error type for [`Hash::from_hex`].
///
/// The `.to_string()` representation of this error distinguishes bad length
/// errors from bad character errors, to help with logging and debugging. That
/// isn't a stable API detail and may change.
#[derive(Clone, Debug)]
pub struct HexError(HexErrorInner);

#[derive(Clone, Debug)]
enum HexErrorInner {
    InvalidByte(u8),
    InvalidLen(usize),
}

impl fmt::Display for HexError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.0 {
            HexErrorInner::InvalidByte(byte) => {
                if byte < 128 {
                    write!(f, "invalid hex character: {:?}", byte as char)
                } else {
                    write!(f, "invalid hex character: 0x{:x}", byte)
                }
            }
            HexErrorInner::InvalidLen(len) => {
                write!(f, "expected 64 hex bytes, received {}", len)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for HexError {}

/// The error type for [`Hasher::new_keyed`] and [`keyed_hash`].
///
/// The keyed mode takes its key as a slice so that runtime key material can
/// be passed directly, which makes the length a runtime check. Exactly
/// [`KEY_LEN`] bytes are required.
#[derive(Clone, Copy, Debug)]
pub struct InvalidKeyLength {
    len: usize,
}

impl fmt::Display for InvalidKeyLength {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "expected {} key bytes, received {}", KEY_LEN, self.len)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for InvalidKeyLength {}

// A chunk or parent node captured just before its final compression. Without
// the ROOT flag the node compresses once into the 32-byte chaining value that
// feeds the tree above it; with ROOT it expands into any number of output
// bytes. Holding the compression inputs rather than the output is what keeps
// that choice open until the caller makes it.
#[derive(Clone)]
struct Node {
    input_chaining_value: CVWords,
    block_words: BlockWords,
    counter: u64,
    block_len: u8,
    flags: u8,
}

impl Node {
    fn chaining_value(&self) -> CVWords {
        compress::first_8_words(compress::compress(
            &self.input_chaining_value,
            &self.block_words,
            self.counter,
            self.block_len,
            self.flags,
        ))
    }

    fn root_output_bytes(&self, out: &mut [u8]) {
        // Each compression yields 64 output bytes, so a partial final block
        // can push the block count at most one past out.len() / 64. The
        // node's own counter is ignored here; root expansion numbers its
        // output blocks from zero.
        let max_output_blocks = out.len() / (2 * OUT_LEN) + 1;
        let mut output_block_counter: u64 = 0;
        for out_block in out.chunks_mut(2 * OUT_LEN) {
            assert!(
                (output_block_counter as usize) < max_output_blocks,
                "output expansion overran its block bound"
            );
            let words = compress::compress(
                &self.input_chaining_value,
                &self.block_words,
                output_block_counter,
                self.block_len,
                self.flags | ROOT,
            );
            // The final block and its final word may both be partial.
            for (word, out_word) in words.iter().zip(out_block.chunks_mut(4)) {
                out_word.copy_from_slice(&word.to_le_bytes()[..out_word.len()]);
            }
            output_block_counter += 1;
        }
    }
}

#[derive(Clone)]
struct ChunkState {
    cv: CVWords,
    chunk_counter: u64,
    buf: [u8; BLOCK_LEN],
    buf_len: u8,
    blocks_compressed: u8,
    flags: u8,
}

impl ChunkState {
    fn new(key: &CVWords, chunk_counter: u64, flags: u8) -> Self {
        Self {
            cv: *key,
            chunk_counter,
            buf: [0; BLOCK_LEN],
            buf_len: 0,
            blocks_compressed: 0,
            flags,
        }
    }

    fn len(&self) -> usize {
        BLOCK_LEN * self.blocks_compressed as usize + self.buf_len as usize
    }

    fn fill_buf(&mut self, input: &mut &[u8]) {
        let want = BLOCK_LEN - self.buf_len as usize;
        let take = cmp::min(want, input.len());
        self.buf[self.buf_len as usize..][..take].copy_from_slice(&input[..take]);
        self.buf_len += take as u8;
        *input = &input[take..];
    }

    fn start_flag(&self) -> u8 {
        if self.blocks_compressed == 0 {
            CHUNK_START
        } else {
            0
        }
    }

    fn update(&mut self, mut input: &[u8]) {
        while !input.is_empty() {
            // A full buffer with more input behind it cannot be the chunk's
            // last block, so it is safe to compress now. The last block waits
            // for output(), where CHUNK_END is decided.
            if self.buf_len as usize == BLOCK_LEN {
                let mut block_words = [0; 16];
                words::words_from_le_bytes(&self.buf, &mut block_words);
                self.cv = compress::first_8_words(compress::compress(
                    &self.cv,
                    &block_words,
                    self.chunk_counter,
                    BLOCK_LEN as u8,
                    self.flags | self.start_flag(),
                ));
                self.blocks_compressed += 1;
                self.buf = [0; BLOCK_LEN];
                self.buf_len = 0;
            }
            self.fill_buf(&mut input);
        }
    }

    fn output(&self) -> Node {
        let mut block_words = [0; 16];
        words::words_from_le_bytes(&self.buf, &mut block_words);
        Node {
            input_chaining_value: self.cv,
            block_words,
            counter: self.chunk_counter,
            block_len: self.buf_len,
            flags: self.flags | self.start_flag() | CHUNK_END,
        }
    }
}

// Don't derive(Debug), because the buffer may hold secret input.
impl fmt::Debug for ChunkState {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("ChunkState")
            .field("len", &self.len())
            .field("chunk_counter", &self.chunk_counter)
            .field("flags", &self.flags)
            .finish()
    }
}

fn parent_node(left_child: &CVWords, right_child: &CVWords, key: &CVWords, flags: u8) -> Node {
    let mut block_words = [0; 16];
    block_words[..8].copy_from_slice(left_child);
    block_words[8..].copy_from_slice(right_child);
    Node {
        input_chaining_value: *key,
        block_words,
        counter: 0,                 // Parent nodes always use counter 0.
        block_len: BLOCK_LEN as u8, // And a full block holding the two CVs.
        flags: flags | PARENT,
    }
}

/// The default hash function.
///
/// For an incremental version that accepts multiple writes, see
/// [`Hasher::new`] and [`Hasher::update`]. For output sizes other than 32
/// bytes, see [`Hasher::digest`] and [`Hasher::finalize_into`].
pub fn hash(input: &[u8]) -> Hash {
    let mut hasher = Hasher::new();
    hasher.update(input);
    hasher.finalize()
}

/// The keyed hash function, requiring exactly [`KEY_LEN`] key bytes.
///
/// This is suitable for use as a message authentication code, for example to
/// replace an HMAC instance. In that use case, the constant-time equality
/// checking provided by [`Hash`] is almost always a security requirement, and
/// callers need to be careful not to compare MACs as raw bytes.
///
/// # Errors
///
/// Returns [`InvalidKeyLength`] if `key` is not exactly 32 bytes.
pub fn keyed_hash(key: &[u8], input: &[u8]) -> Result<Hash, InvalidKeyLength> {
    let mut hasher = Hasher::new_keyed(key)?;
    hasher.update(input);
    Ok(hasher.finalize())
}

/// The key derivation function.
///
/// Given cryptographic key material of any length and a context string of any
/// length, this function outputs a 32-byte derived subkey. **The context
/// string should be hardcoded, globally unique, and application-specific.** A
/// good default format for such strings is `"[application] [commit timestamp]
/// [purpose]"`, e.g., `"example.com 2019-12-25 16:18:03 session tokens v1"`.
/// Deriving a separate subkey per use case protects against bad interactions
/// between algorithms that share key material, and it limits the damage when
/// one part of an application leaks its key.
///
/// Note that BLAKE3 is not a password hash, and **`derive_key` should never
/// be used with passwords.** Instead, use a dedicated password hash like
/// Argon2. Password hashes are entirely different from generic hash
/// functions, with opposite design requirements.
pub fn derive_key(context: &str, key_material: &[u8]) -> [u8; OUT_LEN] {
    let mut hasher = Hasher::new_derive_key(context);
    hasher.update(key_material);
    hasher.finalize().0
}

/// An incremental hash state that can accept any number of writes.
///
/// The digest methods all take `&self`, so a `Hasher` can be finalized at any
/// point and continue accepting input afterwards, and finalizing twice with
/// no update in between returns the same output both times.
///
/// # Examples
///
/// ```
/// // Hash an input incrementally.
/// let mut hasher = b3hash::Hasher::new();
/// hasher.update(b"foo");
/// hasher.update(b"bar");
/// hasher.update(b"baz");
/// assert_eq!(hasher.finalize(), b3hash::hash(b"foobarbaz"));
///
/// // Extended output, any length.
/// # #[cfg(feature = "std")] {
/// let extended = hasher.digest(500);
/// assert_eq!(&extended[..32], hasher.finalize().as_bytes());
/// # }
/// ```
#[derive(Clone)]
pub struct Hasher {
    key: CVWords,
    chunk_state: ChunkState,
    // Chaining values of completed power-of-two subtrees, largest at the
    // bottom. Merging eagerly after every completed chunk keeps the
    // population equal to the set bits of the completed chunk count, so
    // MAX_DEPTH entries cover a full 64-bit byte count.
    cv_stack: ArrayVec<CVWords, MAX_DEPTH>,
}

impl Hasher {
    fn new_internal(key: &CVWords, flags: u8) -> Self {
        Self {
            key: *key,
            chunk_state: ChunkState::new(key, 0, flags),
            cv_stack: ArrayVec::new(),
        }
    }

    /// Construct a new `Hasher` for the regular hash function.
    pub fn new() -> Self {
        Self::new_internal(IV, 0)
    }

    /// Construct a new `Hasher` for the keyed hash function. See
    /// [`keyed_hash`].
    ///
    /// # Errors
    ///
    /// Returns [`InvalidKeyLength`] if `key` is not exactly [`KEY_LEN`]
    /// bytes.
    ///
    /// # Examples
    ///
    /// ```
    /// # fn main() -> Result<(), b3hash::InvalidKeyLength> {
    /// let key = [0x41; 32];
    /// let mut hasher = b3hash::Hasher::new_keyed(&key)?;
    /// hasher.update(b"message");
    /// assert_ne!(hasher.finalize(), b3hash::hash(b"message"));
    ///
    /// assert!(b3hash::Hasher::new_keyed(&key[..31]).is_err());
    /// # Ok(())
    /// # }
    /// ```
    pub fn new_keyed(key: &[u8]) -> Result<Self, InvalidKeyLength> {
        if key.len() != KEY_LEN {
            return Err(InvalidKeyLength { len: key.len() });
        }
        let key_words = words::words_from_le_bytes_32(array_ref!(key, 0, KEY_LEN));
        Ok(Self::new_internal(&key_words, KEYED_HASH))
    }

    /// Construct a new `Hasher` for the key derivation function. See
    /// [`derive_key`]. The context string should be hardcoded, globally
    /// unique, and application-specific.
    pub fn new_derive_key(context: &str) -> Self {
        let mut context_hasher = Self::new_internal(IV, DERIVE_KEY_CONTEXT);
        context_hasher.update(context.as_bytes());
        let context_key = context_hasher.finalize();
        let context_key_words = words::words_from_le_bytes_32(context_key.as_bytes());
        Self::new_internal(&context_key_words, DERIVE_KEY_MATERIAL)
    }

    /// Reset the `Hasher` to its initial state.
    ///
    /// This is functionally the same as overwriting the `Hasher` with a new
    /// one, using the same key or context string if any.
    pub fn reset(&mut self) -> &mut Self {
        self.chunk_state = ChunkState::new(&self.key, 0, self.chunk_state.flags);
        self.cv_stack.clear();
        self
    }

    /// The total number of bytes hashed so far.
    pub fn count(&self) -> u64 {
        self.chunk_state.chunk_counter * CHUNK_LEN as u64 + self.chunk_state.len() as u64
    }

    // total_chunks counts the chunk that just completed. Its trailing zero
    // bits say how many completed subtrees the new chaining value closes off;
    // each one pops its left sibling and compresses a parent, exactly like
    // carry propagation in a binary counter. The stack is never empty while a
    // bit remains to carry, so the pops cannot fail.
    fn add_chunk_chaining_value(&mut self, mut new_cv: CVWords, mut total_chunks: u64) {
        while total_chunks & 1 == 0 {
            let left_child = self.cv_stack.pop().unwrap();
            new_cv = parent_node(&left_child, &new_cv, &self.key, self.chunk_state.flags)
                .chaining_value();
            total_chunks >>= 1;
        }
        self.cv_stack.push(new_cv);
    }

    /// Add input bytes to the hash state. This can be called any number of
    /// times; the result never depends on how the input is split across
    /// calls.
    pub fn update(&mut self, mut input: &[u8]) -> &mut Self {
        while !input.is_empty() {
            // A full chunk with more input behind it is interior, so its
            // chaining value can be merged into the stack now. The last chunk
            // stays live; whether it is the root is decided at finalization.
            if self.chunk_state.len() == CHUNK_LEN {
                let chunk_cv = self.chunk_state.output().chaining_value();
                let total_chunks = self.chunk_state.chunk_counter + 1;
                self.add_chunk_chaining_value(chunk_cv, total_chunks);
                self.chunk_state = ChunkState::new(&self.key, total_chunks, self.chunk_state.flags);
            }
            let want = CHUNK_LEN - self.chunk_state.len();
            let take = cmp::min(want, input.len());
            self.chunk_state.update(&input[..take]);
            input = &input[take..];
        }
        self
    }

    // The live chunk is the rightmost leaf. Folding the stack from the most
    // recently completed subtree outward makes each stored chaining value the
    // left sibling of everything folded so far; the last fold yields the
    // root.
    fn final_node(&self) -> Node {
        let mut node = self.chunk_state.output();
        for left_child in self.cv_stack.iter().rev() {
            node = parent_node(
                left_child,
                &node.chaining_value(),
                &self.key,
                self.chunk_state.flags,
            );
        }
        node
    }

    /// Finalize the hash state and return the 32-byte default-length digest.
    ///
    /// This method is idempotent: it does not modify the hash state, and
    /// calling it twice (or interleaved with the other finalization methods)
    /// gives the same result both times. Zero input bytes is a valid state to
    /// finalize.
    pub fn finalize(&self) -> Hash {
        let mut bytes = [0; OUT_LEN];
        self.final_node().root_output_bytes(&mut bytes);
        Hash(bytes)
    }

    /// Finalize the hash state and fill `out` with extended output, of
    /// whatever length `out` has.
    ///
    /// Any two output lengths agree on their common prefix, so the first 32
    /// bytes always equal [`finalize`](#method.finalize). An empty `out` is
    /// allowed and is a no-op. Like the other finalization methods, this does
    /// not modify the hash state.
    pub fn finalize_into(&self, out: &mut [u8]) {
        self.final_node().root_output_bytes(out);
    }

    /// Finalize the hash state and return `out_len` bytes of extended
    /// output.
    ///
    /// `digest(32)` returns the bytes of [`finalize`](#method.finalize), and
    /// shorter outputs are prefixes of longer ones. `digest(0)` returns an
    /// empty vector.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut hasher = b3hash::Hasher::new();
    /// hasher.update(b"hello world");
    /// let digest = hasher.digest(64);
    /// assert_eq!(&digest[..32], hasher.finalize().as_bytes());
    /// ```
    #[cfg(feature = "std")]
    pub fn digest(&self, out_len: usize) -> Vec<u8> {
        let mut out = vec![0; out_len];
        self.finalize_into(&mut out);
        out
    }

    /// Finalize the hash state and return `out_len` bytes of extended output
    /// encoded as a lowercase hexadecimal string, two characters per byte.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut hasher = b3hash::Hasher::new();
    /// hasher.update(b"This is a string");
    /// assert_eq!(
    ///     hasher.hex_digest(32),
    ///     "718b749f12a61257438b2ea6643555fd995001c9d9ff84764f93f82610a780f2",
    /// );
    /// ```
    #[cfg(feature = "std")]
    pub fn hex_digest(&self, out_len: usize) -> String {
        let bytes = self.digest(out_len);
        let mut s = String::with_capacity(2 * out_len);
        let table = b"0123456789abcdef";
        for &b in &bytes {
            s.push(table[(b >> 4) as usize] as char);
            s.push(table[(b & 0xf) as usize] as char);
        }
        s
    }

    /// Read from `reader` until EOF, adding everything read to the hash
    /// state through a bounded internal buffer.
    ///
    /// Reads failing with [`ErrorKind::Interrupted`] are retried; any other
    /// error is returned unchanged.
    ///
    /// [`ErrorKind::Interrupted`]: https://doc.rust-lang.org/std/io/enum.ErrorKind.html#variant.Interrupted
    ///
    /// # Examples
    ///
    /// ```
    /// # fn main() -> std::io::Result<()> {
    /// let mut hasher = b3hash::Hasher::new();
    /// hasher.update_reader(&b"some stream of bytes"[..])?;
    /// assert_eq!(hasher.finalize(), b3hash::hash(b"some stream of bytes"));
    /// # Ok(())
    /// # }
    /// ```
    #[cfg(feature = "std")]
    pub fn update_reader(&mut self, reader: impl std::io::Read) -> std::io::Result<&mut Self> {
        io::copy_wide(reader, self)?;
        Ok(self)
    }
}

impl Default for Hasher {
    fn default() -> Self {
        Self::new()
    }
}

// Don't derive(Debug), because the state may be secret.
impl fmt::Debug for Hasher {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Hasher")
            .field("flags", &self.chunk_state.flags)
            .finish()
    }
}

#[cfg(feature = "std")]
impl std::io::Write for Hasher {
    /// This is equivalent to [`update`](#method.update).
    fn write(&mut self, input: &[u8]) -> std::io::Result<usize> {
        self.update(input);
        Ok(input.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}
