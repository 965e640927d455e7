mod descriptor;
mod parser;

pub use descriptor::{ChoiceOption, DescriptorError, DescriptorList, FieldDescriptor, FieldKind};
pub use parser::{parse_descriptor_sets, parse_descriptors};
