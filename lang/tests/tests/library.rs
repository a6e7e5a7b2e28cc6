use simple_tests::lib_program;

lib_program!(arith, "arith");
lib_program!(compare, "compare");
lib_program!(variables, "variables");
lib_program!(assignment, "assign");
lib_program!(conditional, "if");
lib_program!(sequence, "sequence");
lib_program!(loop_, "while");
lib_program!(factorial, "factorial");
