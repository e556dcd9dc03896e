//! Levels bundled with the binary.

use std::{fs, io, path::Path};

use pushblock_game::LevelSet;

const BUILTIN: [&str; 3] = [
    "
#######
#P.B.G#
#######
",
    "
######
#G..G#
#.BB.#
#..P.#
######
",
    "
  #####
###...#
#G.B#.#
#.*P..#
#..B#G#
#######
",
];

/// Returns the bundled level set.
pub(crate) fn builtin() -> LevelSet {
    BUILTIN.into_iter().collect()
}

/// Reads one level per file, in the given order.
pub(crate) fn from_files<P>(paths: &[P]) -> io::Result<LevelSet>
where
    P: AsRef<Path>,
{
    paths
        .iter()
        .map(|path| {
            log::debug!("reading level from {}", path.as_ref().display());
            fs::read_to_string(path)
        })
        .collect()
}
