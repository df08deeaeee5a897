fn main() {
    tarkov_afk::run();
}
