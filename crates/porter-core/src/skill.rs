use async_trait::async_trait;
use std::collections::HashMap;

/// Seam for the external semantic-skill engine.
///
/// Porter's HTTP layer routes `/skills/{skill}/functions/{function}` calls to
/// whatever implements this trait; the engine itself (prompt rendering, model
/// calls, skill storage) lives outside this workspace. Implementations fail
/// with [`PorterError::SkillNotFound`](crate::PorterError::SkillNotFound) when
/// the named function does not exist.
#[async_trait]
pub trait SkillRuntime: Send + Sync {
    /// Invoke one named function of one named skill with key-value context
    /// variables, returning the rendered text result.
    async fn invoke(
        &self,
        skill: &str,
        function: &str,
        variables: &HashMap<String, String>,
    ) -> crate::Result<String>;
}

/// Stand-in runtime for deployments with no skill engine wired up: every
/// invocation fails with not-found.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoSkills;

#[async_trait]
impl SkillRuntime for NoSkills {
    async fn invoke(
        &self,
        skill: &str,
        function: &str,
        _variables: &HashMap<String, String>,
    ) -> crate::Result<String> {
        Err(crate::PorterError::SkillNotFound {
            skill: skill.to_string(),
            function: function.to_string(),
        })
    }
}
