use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Diagnostic, Error)]
#[non_exhaustive]
pub enum ReschemaError {
	#[error("invalid input: {0}")]
	#[diagnostic(
		code(reschema::invalid_input),
		help("`reschema_dict` expects a map and `reschema_list` expects a list of maps")
	)]
	InvalidInput(String),

	#[error("{message} ({path})")]
	#[diagnostic(code(reschema::path_not_found))]
	PathNotFound { message: String, path: String },

	#[error("invalid template entry `{key}`: {reason}")]
	#[diagnostic(
		code(reschema::configuration),
		help("to reschema a list, embed a `TemplateNode` instead of a bare list")
	)]
	Configuration { key: String, reason: String },

	#[error("failed to parse reschema options: {0}")]
	#[diagnostic(
		code(reschema::options_parse),
		help(
			"valid keys are add_empty_dict, add_empty_lists, add_missing_keys and \
			 raise_missing_keys, each a boolean"
		)
	)]
	OptionsParse(String),
}

impl ReschemaError {
	pub(crate) fn path_not_found(message: impl Into<String>, path: impl Into<String>) -> Self {
		Self::PathNotFound {
			message: message.into(),
			path: path.into(),
		}
	}

	/// The offending path for [`ReschemaError::PathNotFound`].
	pub fn path(&self) -> Option<&str> {
		match self {
			Self::PathNotFound { path, .. } => Some(path.as_str()),
			_ => None,
		}
	}

	/// The human readable part of a [`ReschemaError::PathNotFound`], without
	/// the path suffix.
	pub fn message(&self) -> Option<&str> {
		match self {
			Self::PathNotFound { message, .. } => Some(message.as_str()),
			_ => None,
		}
	}

	/// Returns `true` when a path lookup failed.
	pub fn is_path_not_found(&self) -> bool {
		matches!(self, Self::PathNotFound { .. })
	}
}

pub type ReschemaResult<T> = Result<T, ReschemaError>;
