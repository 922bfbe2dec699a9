//! Day 4 runner (Repose Record): `day04 1|2 INPUT_FILE`.

fn main() {
    std::process::exit(aocr::day_main(4).code());
}
