//! Day 1 runner (Chronal Calibration): `day01 1|2 INPUT_FILE`.

fn main() {
    std::process::exit(aocr::day_main(1).code());
}
