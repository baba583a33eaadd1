use mongodb::change_stream::event::ResumeToken;

///
/// Point in the change history where a new stream starts
///
#[derive(Debug, Clone, PartialEq)]
pub enum WatchPosition {
    Now,
    ResumeAfter(ResumeToken),

    /// Like `ResumeAfter` but accepts token of an invalidate event
    StartAfter(ResumeToken),
}

impl WatchPosition {
    pub fn resume_after(resume_token: Option<ResumeToken>) -> Self {
        match resume_token {
            Some(resume_token) => Self::ResumeAfter(resume_token),
            None => Self::Now,
        }
    }
}
