#![no_main]

use libfuzzer_sys::fuzz_target;

use quest::algorithms::breadth_first_search;
use quest::problem::Problem;
use quest::problems::quest::QuestProblem;
use quest::replay::Replay;

fuzz_target!(|data: &str| {
    // Keep searches small
    if data.len() > 256 {
        return;
    }
    let Ok(mut problem) = QuestProblem::try_from(data) else {
        return;
    };
    // Displays are clipped past 80 cells
    let (x, y) = problem.dimensions();
    if x > 80 || y > 80 || problem.medals().len() > 4 {
        return;
    }

    // What's displayed loads back as the same quest.
    let shown = problem.to_string();
    let reloaded = QuestProblem::try_from(shown.as_str()).unwrap();
    assert_eq!(reloaded.to_string(), shown);

    if let Some(path) = breadth_first_search(&mut problem) {
        assert!(problem.solves(&path.actions));
        let frame = Replay::new(&problem, &path.actions).final_frame().unwrap();
        assert_eq!(frame.medals_left, 0);
    }
});
