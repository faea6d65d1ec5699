mod print_objects_like_git;
mod report_invalid_objects;
