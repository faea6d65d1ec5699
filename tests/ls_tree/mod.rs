mod list_tree_like_git;
