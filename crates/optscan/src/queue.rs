/// Cursor over the not-yet-consumed arguments
///
/// Popping advances the cursor; the underlying slice is never modified.
#[derive(Debug)]
pub(crate) struct ArgQueue<'a, S> {
    args: &'a [S],
    cursor: usize,
}

impl<'a, S: AsRef<str>> ArgQueue<'a, S> {
    pub(crate) fn new(args: &'a [S]) -> Self {
        Self { args, cursor: 0 }
    }

    pub(crate) fn peek(&self) -> Option<&'a str> {
        self.remaining().first().map(S::as_ref)
    }

    pub(crate) fn pop(&mut self) -> Option<&'a str> {
        let next = self.peek()?;
        self.cursor += 1;
        Some(next)
    }

    pub(crate) fn remaining(&self) -> &'a [S] {
        &self.args[self.cursor..]
    }
}
