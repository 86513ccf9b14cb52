pub mod get_group_offsets;
