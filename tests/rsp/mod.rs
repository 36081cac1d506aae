//! Basic parser and datastructures for known answer tests.

use std::{fs, path::Path};

pub struct KatSet {
    /// Digest length, 0 for arbitrary-length output
    pub length: usize,
    pub tests: Vec<Test>,
}

pub struct Test {
    /// Message length in bits
    pub len: u64,
    /// `ceil(len / 8)` bytes, trailing bits in the high-order end
    pub msg: Vec<u8>,
    /// Hex encoded `MD` or `Squeezed` value
    pub digest: String,
}

impl KatSet {
    pub fn load(path: &Path) -> Self {
        let content = fs::read_to_string(path).expect("unable to read test file");
        Self::parse(&content)
    }

    fn parse(inp: &str) -> Self {
        let mut tests = vec![];
        let mut lines = inp
            .lines()
            .filter(|line| !(line.starts_with('#') || line.is_empty()));

        let mut first_line = lines.next().expect("empty file");
        first_line = first_line.strip_prefix("[L = ").expect("No length");
        first_line = first_line.strip_suffix(']').expect("missing ']'");
        let length = first_line.parse().expect("L can't be parsed as usize");

        while let Some(len_line) = lines.next() {
            let len: u64 = len_line
                .strip_prefix("Len = ")
                .expect("missing Len")
                .parse()
                .expect("unable to parse Len");

            let mut msg = hex::decode(
                lines
                    .next()
                    .expect("missing Msg")
                    .strip_prefix("Msg = ")
                    .expect("missing msg"),
            )
            .expect("unable to decode msg");
            msg.truncate(len.div_ceil(8) as usize);

            let digest_line = lines.next().expect("missing MD");
            let digest = digest_line
                .strip_prefix("MD = ")
                .or_else(|| digest_line.strip_prefix("Squeezed = "))
                .expect("missing MD")
                .to_owned();

            tests.push(Test { len, msg, digest });
        }
        KatSet { length, tests }
    }
}
