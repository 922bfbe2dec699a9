//! Day 2 runner (Inventory Management System): `day02 1|2 INPUT_FILE`.

fn main() {
    std::process::exit(aocr::day_main(2).code());
}
