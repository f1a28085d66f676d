use companion_entity::topic;

fn description(topic: &topic::Model) -> &str {
    topic.description.as_deref().unwrap_or("")
}

pub(crate) fn quiz_prompt(topic: &topic::Model, num_questions: u32) -> String {
    format!(
        r#"Generate {num_questions} multiple choice questions about {title}.
Topic description: {description}

Each question must have exactly 4 options and exactly one correct answer.
Format the result as a JSON array:
[
  {{
    "question": "Question text",
    "options": ["Option A", "Option B", "Option C", "Option D"],
    "correct_answer": "A",
    "explanation": "Why this answer is correct"
  }}
]
Only return the JSON array."#,
        title = topic.title,
        description = description(topic),
    )
}

pub(crate) fn explanation_prompt(topic: &topic::Model) -> String {
    format!(
        "Explain {title} in the context of Machine Learning and AI.
Topic: {description}

Please provide:
1. A clear definition
2. Key concepts and principles
3. How it works
4. Real-world applications
5. Benefits and limitations

Keep the explanation educational and easy to follow for students.",
        title = topic.title,
        description = description(topic),
    )
}

pub(crate) fn tutor_prompt(prompt: &str) -> String {
    format!(
        "You are an AI tutor specialized in Machine Learning and AI concepts.
Explain this clearly for students: {prompt}

Provide:
- A clear explanation
- Practical examples
- Key concepts to remember"
    )
}
