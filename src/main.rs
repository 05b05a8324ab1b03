fn main() {
    airath_landing::mount();
}
