// third-party imports
use criterion::criterion_main;

const GROUP: &str = "minire";
const ND: &str = ":"; // name delimiter

mod matching;

criterion_main!(matching::benches);
