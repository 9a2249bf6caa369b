use super::*;
use std::fs::File;

fn read(content: &str) -> Result<Problem, String> {
    content.to_string().read_instance()
}

#[test]
fn can_read_instance_from_file() {
    let problem = BufReader::new(File::open("../data/instances/mixed.txt").unwrap()).read_instance().unwrap();

    assert_eq!(problem.spaces(), 4);
    assert_eq!(problem.capacity(), 10);
    assert_eq!(problem.themes(), 3);
    assert_eq!(problem.attractions().len(), 12);
    assert_eq!(problem.attraction(3), Some(&Attraction { theme: 3, size: 4 }));
}

#[test]
fn can_read_instance_with_extra_whitespaces() {
    let problem = read("2\n 10 \n2\n3\n1 5\n\n1\t5\n2   10\n\n").unwrap();

    assert_eq!(
        problem.attractions(),
        &[Attraction { theme: 1, size: 5 }, Attraction { theme: 1, size: 5 }, Attraction { theme: 2, size: 10 }]
    );
}

#[test]
fn can_read_instance_without_trailing_newline() {
    let problem = read("1\n5\n1\n1\n1 6").unwrap();

    assert_eq!(problem.unplaceable(), vec![0]);
}

#[test]
fn can_report_malformed_instances() {
    let cases = [
        ("", "line 1: unexpected end of file, expecting amount of spaces"),
        ("2\n10\n", "line 3: unexpected end of file, expecting amount of themes"),
        ("2\nten\n", "line 2: cannot parse space capacity from 'ten': invalid digit found in string"),
        ("2\n10\n2\n3\n1 5\n1\n", "line 6: expecting two integers 'theme size', got: '1'"),
        ("2\n10\n2\n3\n1 5 4\n", "line 5: expecting two integers 'theme size', got: '1 5 4'"),
        ("2\n10\n2\n1\n1 x\n", "line 5: expecting two integers 'theme size', got: '1 x'"),
        ("2\n10\n2\n1\n0 5\n", "line 5: theme and size should be positive: '0 5'"),
        ("2\n10\n2\n3\n1 5\n1 5\n", "expected 3 attractions, got 2"),
        ("2\n10\n1\n2\n1 5\n2 5\n", "theme id 2 exceeds amount of themes 1"),
        ("0\n10\n1\n1\n1 5\n", "amount of spaces should be positive"),
    ];

    for (content, expected) in cases {
        assert_eq!(read(content).err(), Some(expected.to_string()), "content: {content:?}");
    }
}
