//! Prompt template for document-grounded answering.

/// Build the QA prompt from retrieved chunks and the user's question.
///
/// The model is told to answer strictly from the supplied document content
/// and to say so explicitly when the content is insufficient.
pub fn build_qa_prompt(context_chunks: &[String], question: &str) -> String {
    let context = context_chunks.join("\n\n");

    format!(
        r#"You are an educational assistant that answers questions from the provided document content.
Answer strictly based on the document content; do not add information the document does not contain.
If the document does not contain the relevant information, state that explicitly.

Document content:
{context}

Question:
{question}

Answer:"#
    )
}
