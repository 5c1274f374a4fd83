//! Turn pre-chopped romanized syllable fragments into Bopomofo readings.
//!
//! A syllable chopper (not part of this crate) typically splits a long
//! romanization like "zhong1guo2" into fragments; each fragment goes
//! through a fresh composer in romanized mode.

use libfanqie::{Composer, MandarinLayout};

fn main() {
    let fragments = ["zhong1", "guo2", "ren2"];
    for fragment in fragments {
        let mut composer = Composer::new("", MandarinLayout::HanyuPinyin, false);
        let reading = composer.receive_sequence(fragment, true);
        println!(
            "{fragment:>8} -> {:<6} ({})",
            reading.trim_end(),
            composer.get_composition(true, true)
        );
    }
}
