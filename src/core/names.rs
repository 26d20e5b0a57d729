use rand::Rng;

/// Names attributed to synthetic study partners
pub static SAMPLE_NAMES: [&str; 20] = [
    "Aarav Sharma",
    "Ananya Verma",
    "Rohan Mehta",
    "Priya Singh",
    "Vivaan Kapoor",
    "Isha Gupta",
    "Karan Patel",
    "Diya Reddy",
    "Aditya Joshi",
    "Sneha Nair",
    "Rahul Kumar",
    "Pooja Jain",
    "Ankit Malhotra",
    "Meera Rao",
    "Vikram Choudhary",
    "Sanya Khanna",
    "Ritika Bansal",
    "Nikhil Desai",
    "Tanya Saxena",
    "Varun Iyer",
];

/// Draw up to `count` distinct names from the pool
///
/// Sampling works on a private copy of the pool, so the shared list is never
/// touched and every call starts from all 20 names. Fewer than `count` names
/// come back only if the pool runs out.
pub fn draw_names<R: Rng>(rng: &mut R, count: usize) -> Vec<&'static str> {
    let mut available: Vec<&'static str> = SAMPLE_NAMES.to_vec();
    let mut drawn = Vec::with_capacity(count.min(available.len()));

    for _ in 0..count {
        if available.is_empty() {
            break;
        }
        let index = rng.gen_range(0..available.len());
        drawn.push(available.remove(index));
    }

    drawn
}
