//! Day 3 runner (No Matter How You Slice It): `day03 1|2 INPUT_FILE`.

fn main() {
    std::process::exit(aocr::day_main(3).code());
}
