//! Multiple-choice quiz data and scoring.

pub struct QuizQuestion {
    pub prompt: &'static str,
    pub options: &'static [&'static str],
    /// Index of the correct option.
    pub answer: usize,
}

pub const QUIZZES: &[QuizQuestion] = &[
    QuizQuestion {
        prompt: "1) What is C# primarily used for?",
        options: &[
            "Building .NET applications",
            "Low-level hardware programming",
            "Developing Linux kernel modules",
            "Solely for AI/ML algorithms",
        ],
        answer: 0,
    },
    QuizQuestion {
        prompt: "2) Which keyword introduces asynchronous programming in C#?",
        options: &["async/await", "goto/await", "run/async", "waitfor"],
        answer: 0,
    },
    QuizQuestion {
        prompt: "3) LINQ is used for:",
        options: &[
            "Networking operations",
            "Database schema migrations",
            "Querying data from in-memory collections",
            "Graphics rendering",
        ],
        answer: 2,
    },
    QuizQuestion {
        prompt: "4) What is the purpose of the 'using' statement in C#?",
        options: &[
            "To include namespaces",
            "To handle exceptions",
            "To ensure IDisposable objects are disposed",
            "To declare variables",
        ],
        answer: 2,
    },
    QuizQuestion {
        prompt: "5) Which design pattern ensures a class has only one instance?",
        options: &[
            "Factory Pattern",
            "Singleton Pattern",
            "Observer Pattern",
            "Decorator Pattern",
        ],
        answer: 1,
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct QuizScore {
    pub correct: usize,
    pub total: usize,
}

impl QuizScore {
    pub fn summary(&self) -> String {
        format!("You scored {} out of {}", self.correct, self.total)
    }
}

/// Score selected option indices against the quiz.
///
/// Missing, extra, or out-of-range selections count as wrong.
pub fn score(selections: &[usize]) -> QuizScore {
    let correct = QUIZZES
        .iter()
        .zip(selections)
        .filter(|&(ref question, &selected)| question.answer == selected)
        .count();
    QuizScore {
        correct,
        total: QUIZZES.len(),
    }
}
